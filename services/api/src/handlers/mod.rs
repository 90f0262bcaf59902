pub mod auth;
pub mod mod_entry;
pub mod modlist;
