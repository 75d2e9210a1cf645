//! Portal settings API module

use axum::{Json, Router, extract::State, routing::get};
use shared::models::PortalSettings;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/settings", get(get_settings))
}

/// GET /api/settings - cached portal settings (tax rate)
pub async fn get_settings(State(state): State<ServerState>) -> Json<PortalSettings> {
    Json(state.settings().await)
}
