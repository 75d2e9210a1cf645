//! Unified error codes for the colo-portal workspace
//!
//! Error codes are shared between the portal server and its frontends.
//! They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Rent errors
//! - 2xxx: Invoice errors
//! - 3xxx: Payment errors
//! - 4xxx: Space errors
//! - 5xxx: Provider errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Rent ====================
    /// Rent (order) not found
    RentNotFound = 1001,
    /// Rent has no invoices yet
    RentNotBilled = 1002,

    // ==================== 2xxx: Invoice ====================
    /// Invoice not found on the rent
    InvoiceNotFound = 2001,
    /// Invoice has not been released yet
    InvoiceNotReleased = 2002,
    /// Invoice is not in a payable state
    InvoiceNotPayable = 2003,

    // ==================== 3xxx: Payment ====================
    /// Proof of payment is required
    ProofRequired = 3001,
    /// Invoice is not awaiting verification
    PaymentNotVerifiable = 3002,

    // ==================== 4xxx: Space ====================
    /// Space not found
    SpaceNotFound = 4001,

    // ==================== 5xxx: Provider ====================
    /// Provider not found
    ProviderNotFound = 5001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Invoice store request failed
    UpstreamError = 9002,
    /// Invoice store request timed out
    UpstreamTimeout = 9003,
    /// Configuration error
    ConfigError = 9004,
}

impl ErrorCode {
    /// Get the numeric value of this error code
    pub fn value(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",

            Self::RentNotFound => "Rent not found",
            Self::RentNotBilled => "Rent has no invoices",

            Self::InvoiceNotFound => "Invoice not found",
            Self::InvoiceNotReleased => "Invoice has not been released",
            Self::InvoiceNotPayable => "Invoice is not payable",

            Self::ProofRequired => "Proof of payment is required",
            Self::PaymentNotVerifiable => "Invoice is not awaiting verification",

            Self::SpaceNotFound => "Space not found",

            Self::ProviderNotFound => "Provider not found",

            Self::InternalError => "Internal server error",
            Self::UpstreamError => "Invoice store request failed",
            Self::UpstreamTimeout => "Invoice store request timed out",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.value())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.value()
    }
}

/// Error returned when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::InvalidFormat),
            1001 => Ok(Self::RentNotFound),
            1002 => Ok(Self::RentNotBilled),
            2001 => Ok(Self::InvoiceNotFound),
            2002 => Ok(Self::InvoiceNotReleased),
            2003 => Ok(Self::InvoiceNotPayable),
            3001 => Ok(Self::ProofRequired),
            3002 => Ok(Self::PaymentNotVerifiable),
            4001 => Ok(Self::SpaceNotFound),
            5001 => Ok(Self::ProviderNotFound),
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::UpstreamError),
            9003 => Ok(Self::UpstreamTimeout),
            9004 => Ok(Self::ConfigError),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::RentNotFound,
            ErrorCode::InvoiceNotPayable,
            ErrorCode::PaymentNotVerifiable,
            ErrorCode::SpaceNotFound,
            ErrorCode::UpstreamTimeout,
        ] {
            assert_eq!(ErrorCode::try_from(code.value()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert_eq!(ErrorCode::try_from(7777), Err(InvalidErrorCode(7777)));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
        assert_eq!(ErrorCode::RentNotFound.to_string(), "E1001");
        assert_eq!(ErrorCode::InternalError.to_string(), "E9001");
    }
}
