//! Invoice Model

use serde::{Deserialize, Serialize};

/// Invoice-number prefix of the initial (one-time) setup request invoice
pub const SETUP_PREFIX: &str = "REQ-";
/// Invoice-number prefix of recurring rental invoices
pub const RENTAL_PREFIX: &str = "RNT-";

/// Invoice lifecycle status as reported by the invoice store
///
/// The store may introduce new states at any time, so unrecognized values are
/// preserved verbatim in [`InvoiceStatus::Other`] instead of failing
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    /// Awaiting a payment proof
    Unpaid,
    /// Proof accepted, awaiting staff verification
    Paid,
    /// Verification in progress
    Pending,
    /// Payment verified by staff
    Verified,
    /// Proof rejected by staff, must be resubmitted
    Rejected,
    /// Unrecognized status, passed through unchanged
    Other(String),
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "unpaid" => Self::Unpaid,
            "paid" => Self::Paid,
            "pending" => Self::Pending,
            "verified" => Self::Verified,
            "rejected" => Self::Rejected,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for InvoiceStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> String {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Invoice kind, derived from the invoice-number prefix
///
/// The prefix is load-bearing: the setup request gates activation of the
/// whole rent, while rental invoices drive the recurring billing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceKind {
    /// `REQ-` initial one-time setup request
    Setup,
    /// `RNT-` recurring rental invoice
    Rental,
    /// Prefix not recognized (malformed upstream data)
    Unknown,
}

/// Invoice entity as returned by the invoice store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice number (`REQ-...` or `RNT-...`)
    pub invoice_id: String,
    /// Release date (ISO-8601 string). Kept raw; parsing is fail-open
    pub release_date: String,
    pub status: InvoiceStatus,
    /// Set once a payment proof is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    /// Staff member who verified the payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<String>,
    /// Storage key of the uploaded proof-of-payment image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_of_paid: Option<String>,
    /// Per-invoice override of the space's base monthly price
    /// (payment-plan discounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Invoice {
    /// Invoice kind derived from the invoice-number prefix
    pub fn kind(&self) -> InvoiceKind {
        if self.invoice_id.starts_with(SETUP_PREFIX) {
            InvoiceKind::Setup
        } else if self.invoice_id.starts_with(RENTAL_PREFIX) {
            InvoiceKind::Rental
        } else {
            InvoiceKind::Unknown
        }
    }

    /// Whether this is the initial `REQ-` setup request
    pub fn is_setup(&self) -> bool {
        self.kind() == InvoiceKind::Setup
    }

    /// Whether this is a recurring `RNT-` rental invoice
    pub fn is_rental(&self) -> bool {
        self.kind() == InvoiceKind::Rental
    }
}
