#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    ModEntry, ModList, ModListChanges, ModListDetail, ModListSummary, User,
};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError>;
    async fn create(&self, user: &User) -> Result<(), ApiError>;
}

/// Repository for mod lists.
///
/// Every mutating operation takes the requesting user's id and filters by it
/// in the same store operation, so a cross-user call matches zero rows instead
/// of racing a separate ownership check.
pub trait ModListRepository: Send + Sync {
    async fn create(&self, list: &ModList) -> Result<(), ApiError>;

    /// All lists owned by `user_id`, most-recently-updated first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ModListSummary>, ApiError>;

    /// All public lists across users, annotated with their owner.
    async fn list_public(&self) -> Result<Vec<ModListSummary>, ApiError>;

    /// A list by id, only if owned by `user_id`.
    async fn get_owned(&self, id: Uuid, user_id: Uuid)
    -> Result<Option<ModListDetail>, ApiError>;

    /// A list by id, only if flagged public. No owner filter.
    async fn get_public(&self, id: Uuid) -> Result<Option<ModListDetail>, ApiError>;

    /// Ownership pre-check used before entry mutations.
    async fn is_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, ApiError>;

    /// Apply a partial edit to an owner-matched row. Returns `true` if a row
    /// was updated.
    async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: &ModListChanges,
    ) -> Result<bool, ApiError>;

    /// Delete an owner-matched row (entries cascade). Returns `true` if a row
    /// was deleted.
    async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, ApiError>;

    /// All of a user's lists containing the given slug.
    async fn list_containing(
        &self,
        user_id: Uuid,
        mod_slug: &str,
    ) -> Result<Vec<ModListSummary>, ApiError>;

    /// Insert a list together with its entries in one transaction. Used by
    /// the copy operation so a crash never leaves a half-populated copy.
    async fn insert_with_mods(&self, list: &ModList, mods: &[ModEntry]) -> Result<(), ApiError>;
}

/// Repository for the entries inside a list.
pub trait ModEntryRepository: Send + Sync {
    /// Insert an entry. A duplicate `(mod_list_id, mod_slug)` pair fails with
    /// [`ApiError::ModAlreadyInList`] via the unique index.
    async fn add(&self, entry: &ModEntry) -> Result<(), ApiError>;

    /// Delete matching entries. Returns the number of rows removed; removing
    /// an absent slug is not an error.
    async fn remove(&self, mod_list_id: Uuid, mod_slug: &str) -> Result<u64, ApiError>;

    /// Existence check by the unique `(mod_list_id, mod_slug)` key.
    async fn contains(&self, mod_list_id: Uuid, mod_slug: &str) -> Result<bool, ApiError>;
}
