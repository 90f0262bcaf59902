use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use modshelf_auth_types::identity::Identity;

use crate::domain::types::{ModEntry, ModListDetail, ModListSummary};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::modlist::{
    CopyPublicModListUseCase, CreateModListInput, CreateModListUseCase, DeleteModListUseCase,
    GetModListUseCase, GetModListsUseCase, GetPublicModListsUseCase, UpdateModListUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModResponse {
    pub id: Uuid,
    pub mod_list_id: Uuid,
    pub mod_slug: String,
    pub mod_title: String,
    pub mod_icon_url: Option<String>,
    pub mod_author: String,
    #[serde(serialize_with = "modshelf_core::serde::to_rfc3339_ms")]
    pub added_at: chrono::DateTime<chrono::Utc>,
}

impl From<ModEntry> for ModResponse {
    fn from(entry: ModEntry) -> Self {
        ModResponse {
            id: entry.id,
            mod_list_id: entry.mod_list_id,
            mod_slug: entry.mod_slug,
            mod_title: entry.mod_title,
            mod_icon_url: entry.mod_icon_url,
            mod_author: entry.mod_author,
            added_at: entry.added_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: Uuid,
    pub username: String,
}

/// List payload shared by every list-shaped endpoint. `mods` holds the
/// preview for browse views and the full entry list for the detail view;
/// `user` is populated only in the public gallery.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModListResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    #[serde(serialize_with = "modshelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "modshelf_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub mods: Vec<ModResponse>,
    pub mod_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<OwnerResponse>,
}

impl From<ModListSummary> for ModListResponse {
    fn from(summary: ModListSummary) -> Self {
        ModListResponse {
            id: summary.list.id,
            user_id: summary.list.user_id,
            name: summary.list.name,
            description: summary.list.description,
            is_public: summary.list.is_public,
            created_at: summary.list.created_at,
            updated_at: summary.list.updated_at,
            mods: summary.preview.into_iter().map(ModResponse::from).collect(),
            mod_count: summary.mod_count,
            user: summary.owner.map(|o| OwnerResponse {
                id: o.id,
                username: o.username,
            }),
        }
    }
}

impl From<ModListDetail> for ModListResponse {
    fn from(detail: ModListDetail) -> Self {
        let mod_count = detail.mod_count();
        ModListResponse {
            id: detail.list.id,
            user_id: detail.list.user_id,
            name: detail.list.name,
            description: detail.list.description,
            is_public: detail.list.is_public,
            created_at: detail.list.created_at,
            updated_at: detail.list.updated_at,
            mods: detail.mods.into_iter().map(ModResponse::from).collect(),
            mod_count,
            user: None,
        }
    }
}

// ── POST /api/modlists ───────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModListRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

pub async fn create_mod_list(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateModListRequest>,
) -> Result<(StatusCode, Json<ModListResponse>), ApiError> {
    let uc = CreateModListUseCase {
        repo: state.mod_list_repo(),
    };
    let detail = uc
        .execute(
            identity.user_id,
            CreateModListInput {
                name: body.name,
                description: body.description,
                is_public: body.is_public,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(detail.into())))
}

// ── GET /api/modlists ────────────────────────────────────────────────────────

pub async fn get_mod_lists(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<ModListResponse>>, ApiError> {
    let uc = GetModListsUseCase {
        repo: state.mod_list_repo(),
    };
    let lists = uc.execute(identity.user_id).await?;
    Ok(Json(lists.into_iter().map(ModListResponse::from).collect()))
}

// ── GET /api/modlists/public ─────────────────────────────────────────────────

pub async fn get_public_mod_lists(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModListResponse>>, ApiError> {
    let uc = GetPublicModListsUseCase {
        repo: state.mod_list_repo(),
    };
    let lists = uc.execute().await?;
    Ok(Json(lists.into_iter().map(ModListResponse::from).collect()))
}

// ── GET /api/modlists/{id} ───────────────────────────────────────────────────

pub async fn get_mod_list(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ModListResponse>, ApiError> {
    let uc = GetModListUseCase {
        repo: state.mod_list_repo(),
    };
    let detail = uc.execute(id, identity.user_id).await?;
    Ok(Json(detail.into()))
}

// ── PUT /api/modlists/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModListRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModListResponse {
    pub mod_list: ModListResponse,
}

pub async fn update_mod_list(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateModListRequest>,
) -> Result<Json<UpdateModListResponse>, ApiError> {
    let uc = UpdateModListUseCase {
        repo: state.mod_list_repo(),
    };
    let detail = uc
        .execute(
            id,
            identity.user_id,
            crate::domain::types::ModListChanges {
                name: body.name,
                description: body.description,
                is_public: body.is_public,
            },
        )
        .await?;
    Ok(Json(UpdateModListResponse {
        mod_list: detail.into(),
    }))
}

// ── DELETE /api/modlists/{id} ────────────────────────────────────────────────

pub async fn delete_mod_list(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let uc = DeleteModListUseCase {
        repo: state.mod_list_repo(),
    };
    uc.execute(id, identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /api/modlists/public/{id}/copy ──────────────────────────────────────

pub async fn copy_public_mod_list(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ModListResponse>), ApiError> {
    let uc = CopyPublicModListUseCase {
        repo: state.mod_list_repo(),
    };
    let detail = uc.execute(id, identity.user_id).await?;
    Ok((StatusCode::CREATED, Json(detail.into())))
}
