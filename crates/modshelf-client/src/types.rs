//! Wire types for the modshelf API. Field names follow the server's camelCase
//! JSON; timestamps stay as the RFC 3339 strings the server emits.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Auth ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfilePayload {
    pub user: User,
}

// ── Mod lists ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mod {
    pub id: Uuid,
    pub mod_list_id: Uuid,
    pub mod_slug: String,
    pub mod_title: String,
    pub mod_icon_url: Option<String>,
    pub mod_author: String,
    pub added_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: String,
    pub updated_at: String,
    pub mods: Vec<Mod>,
    pub mod_count: u64,
    /// Present only in the public gallery response.
    #[serde(default)]
    pub user: Option<Owner>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModListRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_public: bool,
}

/// Partial edit; absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddModRequest {
    pub mod_slug: String,
    pub mod_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_icon_url: Option<String>,
    pub mod_author: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoveModRequest {
    pub mod_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateModListPayload {
    pub mod_list: ModList,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckModPayload {
    pub is_in_mod_list: bool,
}

/// Server error body: `{ "kind": ..., "message": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[allow(dead_code)]
    pub kind: String,
    pub message: String,
}
