use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use modshelf_auth_types::identity::Identity;

use crate::error::ApiError;
use crate::handlers::modlist::{ModListResponse, ModResponse};
use crate::state::AppState;
use crate::usecase::mod_entry::{
    AddModInput, AddModUseCase, CheckModUseCase, GetModListsContainingUseCase, RemoveModUseCase,
};

// ── POST /api/modlists/{id}/mods ─────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddModRequest {
    pub mod_slug: String,
    pub mod_title: String,
    pub mod_icon_url: Option<String>,
    pub mod_author: String,
}

pub async fn add_mod(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AddModRequest>,
) -> Result<(StatusCode, Json<ModResponse>), ApiError> {
    let uc = AddModUseCase {
        lists: state.mod_list_repo(),
        mods: state.mod_entry_repo(),
    };
    let entry = uc
        .execute(
            id,
            identity.user_id,
            AddModInput {
                mod_slug: body.mod_slug,
                mod_title: body.mod_title,
                mod_icon_url: body.mod_icon_url,
                mod_author: body.mod_author,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

// ── DELETE /api/modlists/{id}/mods ───────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveModRequest {
    pub mod_slug: String,
}

pub async fn remove_mod(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RemoveModRequest>,
) -> Result<StatusCode, ApiError> {
    let uc = RemoveModUseCase {
        lists: state.mod_list_repo(),
        mods: state.mod_entry_repo(),
    };
    uc.execute(id, identity.user_id, &body.mod_slug).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /api/modlists/{id}/mods/check ────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModSlugQuery {
    pub mod_slug: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckModResponse {
    pub is_in_mod_list: bool,
}

pub async fn check_mod(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ModSlugQuery>,
) -> Result<Json<CheckModResponse>, ApiError> {
    let uc = CheckModUseCase {
        mods: state.mod_entry_repo(),
    };
    let is_in_mod_list = uc.execute(id, &query.mod_slug).await?;
    Ok(Json(CheckModResponse { is_in_mod_list }))
}

// ── GET /api/modlists/mods/containing ────────────────────────────────────────

pub async fn get_mod_lists_containing(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<ModSlugQuery>,
) -> Result<Json<Vec<ModListResponse>>, ApiError> {
    let uc = GetModListsContainingUseCase {
        lists: state.mod_list_repo(),
    };
    let lists = uc.execute(identity.user_id, &query.mod_slug).await?;
    Ok(Json(lists.into_iter().map(ModListResponse::from).collect()))
}
