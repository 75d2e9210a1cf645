//! Server core: configuration, shared state, and the HTTP server itself

mod config;
mod error;
mod server;
mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
