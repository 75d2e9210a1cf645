//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Rent errors
/// - 2xxx: Invoice errors
/// - 3xxx: Payment errors
/// - 4xxx: Space errors
/// - 5xxx: Provider errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Rent errors (1xxx)
    Rent,
    /// Invoice errors (2xxx)
    Invoice,
    /// Payment errors (3xxx)
    Payment,
    /// Space errors (4xxx)
    Space,
    /// Provider errors (5xxx)
    Provider,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Rent,
            2000..3000 => Self::Invoice,
            3000..4000 => Self::Payment,
            4000..5000 => Self::Space,
            5000..6000 => Self::Provider,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Rent => "rent",
            Self::Invoice => "invoice",
            Self::Payment => "payment",
            Self::Space => "space",
            Self::Provider => "provider",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.value())
    }
}
