//! Error re-exports
//!
//! The portal uses the unified error system from the `shared` crate; this
//! module keeps handler imports short.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
