use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check. The portal serves a
/// single embedded store, so readiness equals liveness here.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
