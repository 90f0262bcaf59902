//! sea-orm entities for the modshelf api service.

pub mod mod_entries;
pub mod mod_lists;
pub mod users;
