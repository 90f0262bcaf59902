use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{ModEntryRepository, ModListRepository};
use crate::domain::types::{ModEntry, ModListSummary};
use crate::error::ApiError;

// ── AddMod ───────────────────────────────────────────────────────────────────

pub struct AddModInput {
    pub mod_slug: String,
    pub mod_title: String,
    pub mod_icon_url: Option<String>,
    pub mod_author: String,
}

pub struct AddModUseCase<L: ModListRepository, M: ModEntryRepository> {
    pub lists: L,
    pub mods: M,
}

impl<L: ModListRepository, M: ModEntryRepository> AddModUseCase<L, M> {
    pub async fn execute(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        input: AddModInput,
    ) -> Result<ModEntry, ApiError> {
        if input.mod_slug.trim().is_empty() {
            return Err(ApiError::MissingData);
        }
        if !self.lists.is_owned(list_id, user_id).await? {
            return Err(ApiError::ModListNotFound);
        }
        let entry = ModEntry {
            id: Uuid::now_v7(),
            mod_list_id: list_id,
            mod_slug: input.mod_slug,
            mod_title: input.mod_title,
            mod_icon_url: input.mod_icon_url,
            mod_author: input.mod_author,
            added_at: Utc::now(),
        };
        self.mods.add(&entry).await?;
        Ok(entry)
    }
}

// ── RemoveMod ────────────────────────────────────────────────────────────────

pub struct RemoveModUseCase<L: ModListRepository, M: ModEntryRepository> {
    pub lists: L,
    pub mods: M,
}

impl<L: ModListRepository, M: ModEntryRepository> RemoveModUseCase<L, M> {
    pub async fn execute(
        &self,
        list_id: Uuid,
        user_id: Uuid,
        mod_slug: &str,
    ) -> Result<(), ApiError> {
        if !self.lists.is_owned(list_id, user_id).await? {
            return Err(ApiError::ModListNotFound);
        }
        // Removing an absent slug is a no-op, not an error.
        self.mods.remove(list_id, mod_slug).await?;
        Ok(())
    }
}

// ── CheckMod ─────────────────────────────────────────────────────────────────

/// Membership probe by (list id, slug). Takes no owner on purpose: any
/// authenticated caller may probe any list id.
pub struct CheckModUseCase<M: ModEntryRepository> {
    pub mods: M,
}

impl<M: ModEntryRepository> CheckModUseCase<M> {
    pub async fn execute(&self, list_id: Uuid, mod_slug: &str) -> Result<bool, ApiError> {
        self.mods.contains(list_id, mod_slug).await
    }
}

// ── GetModListsContaining ────────────────────────────────────────────────────

pub struct GetModListsContainingUseCase<L: ModListRepository> {
    pub lists: L,
}

impl<L: ModListRepository> GetModListsContainingUseCase<L> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        mod_slug: &str,
    ) -> Result<Vec<ModListSummary>, ApiError> {
        self.lists.list_containing(user_id, mod_slug).await
    }
}
