//! Rent Model
//!
//! A rent is the contract binding a customer to a rack space: the order
//! itself plus the ordered list of invoices the store has issued for it.

use super::invoice::{Invoice, InvoiceStatus};
use serde::{Deserialize, Serialize};

/// Customer or provider reference embedded in a rent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentParty {
    pub id: String,
    pub name: String,
}

/// Space reference embedded in a rent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentSpace {
    pub id: String,
    pub name: String,
    /// Base monthly price in currency unit (IDR, no decimal subunits)
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Rent entity (order/contract) as returned by the invoice store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rent {
    pub id: String,
    pub customer: RentParty,
    pub provider: RentParty,
    pub space: RentSpace,
    /// Invoices in insertion order. NOT guaranteed sorted by release date;
    /// consumers must sort explicitly when chronology matters
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Derived rent status label
///
/// Never stored; computed from the rent's invoice list by the billing core.
/// While the rent is unactivated the setup invoice's own status drives the
/// whole order, which is what the [`RentState::Invoice`] variant carries.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(into = "String")]
pub enum RentState {
    /// No invoices, or nothing to derive a status from
    Unknown,
    /// Rental phase running with no payment gap
    Active,
    /// Every visible invoice has been verified
    Completed,
    /// A rental invoice awaits staff verification
    PendingVerification,
    /// At least one released invoice is unpaid
    RequiresPayment,
    /// Pre-activation passthrough of an invoice's own status
    Invoice(InvoiceStatus),
}

impl RentState {
    pub fn label(&self) -> String {
        match self {
            Self::Unknown => "unknown".to_string(),
            Self::Active => "active".to_string(),
            Self::Completed => "completed".to_string(),
            Self::PendingVerification => "pending verification".to_string(),
            Self::RequiresPayment => "requires payment".to_string(),
            Self::Invoice(status) => status.as_str().to_string(),
        }
    }
}

impl From<RentState> for String {
    fn from(state: RentState) -> String {
        state.label()
    }
}

impl std::fmt::Display for RentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        assert_eq!(RentState::Unknown.label(), "unknown");
        assert_eq!(RentState::PendingVerification.label(), "pending verification");
        assert_eq!(RentState::RequiresPayment.label(), "requires payment");
        assert_eq!(
            RentState::Invoice(InvoiceStatus::Unpaid).label(),
            "unpaid"
        );
        assert_eq!(
            RentState::Invoice(InvoiceStatus::Other("escalated".into())).label(),
            "escalated"
        );
    }

    #[test]
    fn test_state_serializes_as_label() {
        let json = serde_json::to_string(&RentState::PendingVerification).unwrap();
        assert_eq!(json, "\"pending verification\"");
    }
}
