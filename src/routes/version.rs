use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// GET /api/version — deployed build fingerprint, never cached.
pub async fn version(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(VersionResponse {
            version: state.version.to_string(),
        }),
    )
}
