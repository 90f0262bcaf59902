use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ModListRepository;
use crate::domain::types::{ModEntry, ModList, ModListChanges, ModListDetail, ModListSummary};
use crate::error::ApiError;

// ── CreateModList ────────────────────────────────────────────────────────────

pub struct CreateModListInput {
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
}

pub struct CreateModListUseCase<R: ModListRepository> {
    pub repo: R,
}

impl<R: ModListRepository> CreateModListUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CreateModListInput,
    ) -> Result<ModListDetail, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::MissingData);
        }
        let now = Utc::now();
        let list = ModList {
            id: Uuid::now_v7(),
            user_id,
            name: input.name,
            description: input.description,
            is_public: input.is_public,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&list).await?;
        Ok(ModListDetail { list, mods: vec![] })
    }
}

// ── GetModLists ──────────────────────────────────────────────────────────────

pub struct GetModListsUseCase<R: ModListRepository> {
    pub repo: R,
}

impl<R: ModListRepository> GetModListsUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<ModListSummary>, ApiError> {
        self.repo.list_by_user(user_id).await
    }
}

// ── GetPublicModLists ────────────────────────────────────────────────────────

pub struct GetPublicModListsUseCase<R: ModListRepository> {
    pub repo: R,
}

impl<R: ModListRepository> GetPublicModListsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<ModListSummary>, ApiError> {
        self.repo.list_public().await
    }
}

// ── GetModList ───────────────────────────────────────────────────────────────

pub struct GetModListUseCase<R: ModListRepository> {
    pub repo: R,
}

impl<R: ModListRepository> GetModListUseCase<R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> Result<ModListDetail, ApiError> {
        self.repo
            .get_owned(id, user_id)
            .await?
            .ok_or(ApiError::ModListNotFound)
    }
}

// ── UpdateModList ────────────────────────────────────────────────────────────

pub struct UpdateModListUseCase<R: ModListRepository> {
    pub repo: R,
}

impl<R: ModListRepository> UpdateModListUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: ModListChanges,
    ) -> Result<ModListDetail, ApiError> {
        if changes.is_empty() {
            return Err(ApiError::MissingData);
        }
        // Zero rows means wrong owner or missing id; both surface as not-found.
        let updated = self.repo.update(id, user_id, &changes).await?;
        if !updated {
            return Err(ApiError::ModListNotFound);
        }
        self.repo
            .get_owned(id, user_id)
            .await?
            .ok_or(ApiError::ModListNotFound)
    }
}

// ── DeleteModList ────────────────────────────────────────────────────────────

pub struct DeleteModListUseCase<R: ModListRepository> {
    pub repo: R,
}

impl<R: ModListRepository> DeleteModListUseCase<R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        let deleted = self.repo.delete(id, user_id).await?;
        if !deleted {
            return Err(ApiError::ModListNotFound);
        }
        Ok(())
    }
}

// ── CopyPublicModList ────────────────────────────────────────────────────────

pub struct CopyPublicModListUseCase<R: ModListRepository> {
    pub repo: R,
}

impl<R: ModListRepository> CopyPublicModListUseCase<R> {
    pub async fn execute(&self, source_id: Uuid, user_id: Uuid) -> Result<ModListDetail, ApiError> {
        let source = self
            .repo
            .get_public(source_id)
            .await?
            .ok_or(ApiError::ModListNotFound)?;

        let now = Utc::now();
        let copy = ModList {
            id: Uuid::now_v7(),
            user_id,
            name: format!("{} (Copy)", source.list.name),
            description: source.list.description.clone(),
            // Copies are always private, whatever the source was.
            is_public: false,
            created_at: now,
            updated_at: now,
        };
        let mods: Vec<ModEntry> = source
            .mods
            .iter()
            .map(|m| ModEntry {
                id: Uuid::now_v7(),
                mod_list_id: copy.id,
                mod_slug: m.mod_slug.clone(),
                mod_title: m.mod_title.clone(),
                mod_icon_url: m.mod_icon_url.clone(),
                mod_author: m.mod_author.clone(),
                added_at: now,
            })
            .collect();

        self.repo.insert_with_mods(&copy, &mods).await?;

        self.repo
            .get_owned(copy.id, user_id)
            .await?
            .ok_or(ApiError::ModListNotFound)
    }
}
