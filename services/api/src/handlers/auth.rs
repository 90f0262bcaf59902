use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use modshelf_auth_types::identity::Identity;

use crate::domain::types::User;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::auth::{
    GetProfileUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Public view of an account. Never carries the password hash.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    #[serde(serialize_with = "modshelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

// ── POST /api/auth/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let uc = RegisterUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = uc
        .execute(RegisterInput {
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: output.user.into(),
            token: output.token,
        }),
    ))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let uc = LoginUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = uc
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(AuthResponse {
        user: output.user.into(),
        token: output.token,
    }))
}

// ── POST /api/auth/logout ────────────────────────────────────────────────────

/// Tokens are not revocable server-side; this acknowledges the client
/// discarding its copy.
pub async fn logout(_identity: Identity) -> StatusCode {
    StatusCode::NO_CONTENT
}

// ── GET /api/auth/profile ────────────────────────────────────────────────────

pub async fn profile(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let uc = GetProfileUseCase {
        users: state.user_repo(),
    };
    let user = uc.execute(identity.user_id).await?;
    Ok(Json(ProfileResponse { user: user.into() }))
}
