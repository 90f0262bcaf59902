//! Bearer-token identity extractor for axum handlers.

use axum::extract::{FromRef, FromRequestParts};
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;
use uuid::Uuid;

use crate::token::validate_token;

/// The HMAC secret used to validate bearer tokens, provided by the service's
/// application state via `FromRef`.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// Authenticated caller, extracted from the `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is absent, not a bearer scheme, or carries
/// a token that fails validation for any reason — callers cannot distinguish
/// "malformed" from "expired" from "tampered".
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
}

/// Extract the token value from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_owned);

        async move {
            let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
            let info =
                validate_token(&token, &secret.0).map_err(|_| StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id: info.user_id,
            })
        }
    }
}
