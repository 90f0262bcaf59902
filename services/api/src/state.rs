use axum::extract::FromRef;
use modshelf_auth_types::identity::JwtSecret;
use sea_orm::DatabaseConnection;

use crate::infra::db::{DbModEntryRepository, DbModListRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn mod_list_repo(&self) -> DbModListRepository {
        DbModListRepository {
            db: self.db.clone(),
        }
    }

    pub fn mod_entry_repo(&self) -> DbModEntryRepository {
        DbModEntryRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> JwtSecret {
        JwtSecret(state.jwt_secret.clone())
    }
}
