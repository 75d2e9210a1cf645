//! Provider directory API module

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use shared::models::Provider;

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/providers", get(list))
        .route("/api/providers/{id}", get(get_by_id))
}

/// GET /api/providers - provider directory
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Provider>>> {
    let providers = state.store.list_providers().await?;
    Ok(Json(providers))
}

/// GET /api/providers/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Provider>> {
    let provider = state.store.get_provider(&id).await?;
    Ok(Json(provider))
}
