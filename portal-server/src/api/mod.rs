//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness and upstream reachability
//! - [`rents`] - customer/provider orders with derived billing state
//! - [`spaces`] - rack-space catalog with plan pricing
//! - [`providers`] - provider directory
//! - [`settings`] - portal settings (tax rate)

pub mod health;
pub mod providers;
pub mod rents;
pub mod settings;
pub mod spaces;

use axum::Router;

use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(rents::router())
        .merge(spaces::router())
        .merge(providers::router())
        .merge(settings::router())
        .with_state(state)
}
