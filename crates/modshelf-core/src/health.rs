use axum::http::StatusCode;

/// Handler for `GET /healthz` — process liveness.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness. The api service mounts this as-is;
/// anything needing a deeper check (e.g. a DB ping) overrides it locally.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
