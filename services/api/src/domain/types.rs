use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account record. `password_hash` is an Argon2id PHC string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named, user-owned, optionally public collection of mod references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One mod's presence record inside a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModEntry {
    pub id: Uuid,
    pub mod_list_id: Uuid,
    pub mod_slug: String,
    pub mod_title: String,
    pub mod_icon_url: Option<String>,
    pub mod_author: String,
    pub added_at: DateTime<Utc>,
}

/// Owner annotation attached to public lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModListOwner {
    pub id: Uuid,
    pub username: String,
}

/// List shape for browse views: the 5 most-recently-added entries as a
/// preview plus the total entry count. `owner` is populated only for the
/// public gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModListSummary {
    pub list: ModList,
    pub preview: Vec<ModEntry>,
    pub mod_count: u64,
    pub owner: Option<ModListOwner>,
}

/// List shape for the detail view: every entry, most-recently-added first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModListDetail {
    pub list: ModList,
    pub mods: Vec<ModEntry>,
}

impl ModListDetail {
    pub fn mod_count(&self) -> u64 {
        self.mods.len() as u64
    }
}

/// Partial edit applied to a list; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ModListChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

impl ModListChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.is_public.is_none()
    }
}
