//! Colocation marketplace portal server
//!
//! Serves the portal's REST surface over the external invoice store: rents
//! with derived billing state, the space/provider catalog with plan pricing,
//! payment-proof submission and staff verification. The decision logic lives
//! in [`billing`]; everything else is composition around it.

pub mod api;
pub mod billing;
pub mod core;
pub mod store;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};

/// Load `.env` and set up logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    utils::logger::init_logger();
}
