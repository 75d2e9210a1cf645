//! Shared types for the colo-portal workspace
//!
//! Common types used across the portal crates: domain models mirroring the
//! invoice store's wire shapes, and the unified error/response system.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
