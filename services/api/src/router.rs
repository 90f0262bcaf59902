use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use modshelf_core::health::{healthz, readyz};
use modshelf_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{login, logout, profile, register},
    mod_entry::{add_mod, check_mod, get_mod_lists_containing, remove_mod},
    modlist::{
        copy_public_mod_list, create_mod_list, delete_mod_list, get_mod_list, get_mod_lists,
        get_public_mod_lists, update_mod_list,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/profile", get(profile))
        // Mod lists
        .route("/api/modlists", post(create_mod_list))
        .route("/api/modlists", get(get_mod_lists))
        .route("/api/modlists/public", get(get_public_mod_lists))
        .route("/api/modlists/public/{id}/copy", post(copy_public_mod_list))
        .route("/api/modlists/mods/containing", get(get_mod_lists_containing))
        .route("/api/modlists/{id}", get(get_mod_list))
        .route("/api/modlists/{id}", put(update_mod_list))
        .route("/api/modlists/{id}", delete(delete_mod_list))
        // Mods within a list
        .route("/api/modlists/{id}/mods", post(add_mod))
        .route("/api/modlists/{id}/mods", delete(remove_mod))
        .route("/api/modlists/{id}/mods/check", get(check_mod))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
