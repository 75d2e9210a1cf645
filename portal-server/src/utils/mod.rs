//! Utility module - shared helpers and type aliases
//!
//! - [`AppError`] / [`AppResult`] - error types (from `shared::error`)
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
