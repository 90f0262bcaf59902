use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use modshelf_api::domain::repository::{ModEntryRepository, ModListRepository, UserRepository};
use modshelf_api::domain::types::{
    ModEntry, ModList, ModListChanges, ModListDetail, ModListOwner, ModListSummary, User,
};
use modshelf_api::error::ApiError;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests-only";

const PREVIEW_MODS: usize = 5;

// ── Shared in-memory store ───────────────────────────────────────────────────

/// Backing store shared by the list and entry mocks, so a scenario can drive
/// several use cases against one consistent dataset.
#[derive(Default)]
pub struct Store {
    pub users: Vec<User>,
    pub lists: Vec<ModList>,
    pub entries: Vec<ModEntry>,
}

pub fn new_store() -> Arc<Mutex<Store>> {
    Arc::new(Mutex::new(Store::default()))
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub store: Arc<Mutex<Store>>,
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        self.store.lock().unwrap().users.push(user.clone());
        Ok(())
    }
}

// ── MockModListRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockModListRepo {
    pub store: Arc<Mutex<Store>>,
}

fn summarize(store: &Store, list: &ModList, with_owner: bool) -> ModListSummary {
    let mut entries: Vec<ModEntry> = store
        .entries
        .iter()
        .filter(|e| e.mod_list_id == list.id)
        .cloned()
        .collect();
    entries.sort_by(|a, b| b.added_at.cmp(&a.added_at));
    let mod_count = entries.len() as u64;
    entries.truncate(PREVIEW_MODS);

    let owner = if with_owner {
        store
            .users
            .iter()
            .find(|u| u.id == list.user_id)
            .map(|u| ModListOwner {
                id: u.id,
                username: u.username.clone(),
            })
    } else {
        None
    };

    ModListSummary {
        list: list.clone(),
        preview: entries,
        mod_count,
        owner,
    }
}

fn detail(store: &Store, list: &ModList) -> ModListDetail {
    let mut mods: Vec<ModEntry> = store
        .entries
        .iter()
        .filter(|e| e.mod_list_id == list.id)
        .cloned()
        .collect();
    mods.sort_by(|a, b| b.added_at.cmp(&a.added_at));
    ModListDetail {
        list: list.clone(),
        mods,
    }
}

impl ModListRepository for MockModListRepo {
    async fn create(&self, list: &ModList) -> Result<(), ApiError> {
        self.store.lock().unwrap().lists.push(list.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ModListSummary>, ApiError> {
        let store = self.store.lock().unwrap();
        let mut lists: Vec<&ModList> =
            store.lists.iter().filter(|l| l.user_id == user_id).collect();
        lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(lists.iter().map(|l| summarize(&store, l, false)).collect())
    }

    async fn list_public(&self) -> Result<Vec<ModListSummary>, ApiError> {
        let store = self.store.lock().unwrap();
        let mut lists: Vec<&ModList> = store.lists.iter().filter(|l| l.is_public).collect();
        lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(lists.iter().map(|l| summarize(&store, l, true)).collect())
    }

    async fn get_owned(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ModListDetail>, ApiError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .lists
            .iter()
            .find(|l| l.id == id && l.user_id == user_id)
            .map(|l| detail(&store, l)))
    }

    async fn get_public(&self, id: Uuid) -> Result<Option<ModListDetail>, ApiError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .lists
            .iter()
            .find(|l| l.id == id && l.is_public)
            .map(|l| detail(&store, l)))
    }

    async fn is_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .lists
            .iter()
            .any(|l| l.id == id && l.user_id == user_id))
    }

    async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: &ModListChanges,
    ) -> Result<bool, ApiError> {
        let mut store = self.store.lock().unwrap();
        let Some(list) = store
            .lists
            .iter_mut()
            .find(|l| l.id == id && l.user_id == user_id)
        else {
            return Ok(false);
        };
        if let Some(name) = &changes.name {
            list.name = name.clone();
        }
        if let Some(description) = &changes.description {
            list.description = Some(description.clone());
        }
        if let Some(is_public) = changes.is_public {
            list.is_public = is_public;
        }
        list.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        let mut store = self.store.lock().unwrap();
        let before = store.lists.len();
        store.lists.retain(|l| !(l.id == id && l.user_id == user_id));
        let deleted = store.lists.len() < before;
        if deleted {
            // Entries cascade with their list.
            store.entries.retain(|e| e.mod_list_id != id);
        }
        Ok(deleted)
    }

    async fn list_containing(
        &self,
        user_id: Uuid,
        mod_slug: &str,
    ) -> Result<Vec<ModListSummary>, ApiError> {
        let store = self.store.lock().unwrap();
        let mut lists: Vec<&ModList> = store
            .lists
            .iter()
            .filter(|l| {
                l.user_id == user_id
                    && store
                        .entries
                        .iter()
                        .any(|e| e.mod_list_id == l.id && e.mod_slug == mod_slug)
            })
            .collect();
        lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(lists.iter().map(|l| summarize(&store, l, false)).collect())
    }

    async fn insert_with_mods(&self, list: &ModList, mods: &[ModEntry]) -> Result<(), ApiError> {
        let mut store = self.store.lock().unwrap();
        store.lists.push(list.clone());
        store.entries.extend(mods.iter().cloned());
        Ok(())
    }
}

// ── MockModEntryRepo ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockModEntryRepo {
    pub store: Arc<Mutex<Store>>,
}

impl ModEntryRepository for MockModEntryRepo {
    async fn add(&self, entry: &ModEntry) -> Result<(), ApiError> {
        let mut store = self.store.lock().unwrap();
        if store
            .entries
            .iter()
            .any(|e| e.mod_list_id == entry.mod_list_id && e.mod_slug == entry.mod_slug)
        {
            return Err(ApiError::ModAlreadyInList);
        }
        store.entries.push(entry.clone());
        Ok(())
    }

    async fn remove(&self, mod_list_id: Uuid, mod_slug: &str) -> Result<u64, ApiError> {
        let mut store = self.store.lock().unwrap();
        let before = store.entries.len();
        store
            .entries
            .retain(|e| !(e.mod_list_id == mod_list_id && e.mod_slug == mod_slug));
        Ok((before - store.entries.len()) as u64)
    }

    async fn contains(&self, mod_list_id: Uuid, mod_slug: &str) -> Result<bool, ApiError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .entries
            .iter()
            .any(|e| e.mod_list_id == mod_list_id && e.mod_slug == mod_slug))
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user(username: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$unused$unused".to_owned(),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_list(user_id: Uuid, name: &str, is_public: bool) -> ModList {
    let now = Utc::now();
    ModList {
        id: Uuid::now_v7(),
        user_id,
        name: name.to_owned(),
        description: None,
        is_public,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_entry(mod_list_id: Uuid, mod_slug: &str) -> ModEntry {
    ModEntry {
        id: Uuid::now_v7(),
        mod_list_id,
        mod_slug: mod_slug.to_owned(),
        mod_title: format!("{mod_slug} title"),
        mod_icon_url: None,
        mod_author: "author".to_owned(),
        added_at: Utc::now(),
    }
}
