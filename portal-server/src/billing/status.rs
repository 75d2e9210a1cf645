//! Rent status resolver
//!
//! Derives the single status label a rent presents as from its invoice
//! list, plus the actionable invoices around it (what to pay next, what to
//! resubmit). The initial `REQ-` setup request gates activation: while it is
//! the latest visible invoice, its own status drives the whole rent. Once
//! rental invoices exist the rent is active unless a concrete payment gap or
//! pending verification says otherwise, and only a fully verified history
//! reads as completed.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::models::{Invoice, InvoiceStatus, RentState};

use super::visibility::{days_until_release, parse_release_date, visible_invoices};

/// Resolve the rent-level status from the invoice list
///
/// Evaluated in order, first match wins:
/// 1. no invoices → `Unknown`
/// 2. nothing visible: future invoices pending → `Active`, else `Unknown`
/// 3. latest visible is the setup request → its status verbatim
/// 4. rental phase: all verified → `Completed`; pending rental →
///    `PendingVerification`; any unpaid → `RequiresPayment`; else `Active`
pub fn resolve_rent_state(invoices: &[Invoice], now: DateTime<Utc>) -> RentState {
    if invoices.is_empty() {
        return RentState::Unknown;
    }

    let visible = visible_invoices(invoices, now);
    let Some(latest) = visible.last() else {
        let has_future = invoices
            .iter()
            .any(|inv| days_until_release(&inv.release_date, now) > 0);
        return if has_future {
            RentState::Active
        } else {
            RentState::Unknown
        };
    };

    if latest.is_setup() {
        return RentState::Invoice(latest.status.clone());
    }

    // Rental phase only begins once an RNT- invoice is visible; anything
    // else is malformed data and falls back to the latest invoice's status.
    if !visible.iter().any(|inv| inv.is_rental()) {
        return RentState::Invoice(latest.status.clone());
    }

    if visible.iter().all(|inv| inv.status == InvoiceStatus::Verified) {
        return RentState::Completed;
    }
    if visible
        .iter()
        .any(|inv| inv.is_rental() && inv.status == InvoiceStatus::Pending)
    {
        return RentState::PendingVerification;
    }
    if visible.iter().any(|inv| inv.status == InvoiceStatus::Unpaid) {
        return RentState::RequiresPayment;
    }
    RentState::Active
}

/// Any currently relevant invoice awaiting payment
pub fn has_unpaid_invoices(invoices: &[Invoice], now: DateTime<Utc>) -> bool {
    visible_invoices(invoices, now)
        .iter()
        .any(|inv| inv.status == InvoiceStatus::Unpaid)
}

/// Any currently relevant invoice with a rejected proof
pub fn has_rejected_invoices(invoices: &[Invoice], now: DateTime<Utc>) -> bool {
    visible_invoices(invoices, now)
        .iter()
        .any(|inv| inv.status == InvoiceStatus::Rejected)
}

/// The invoice to pay next: earliest visible unpaid invoice
pub fn next_unpaid_invoice(invoices: &[Invoice], now: DateTime<Utc>) -> Option<&Invoice> {
    visible_invoices(invoices, now)
        .into_iter()
        .find(|inv| inv.status == InvoiceStatus::Unpaid)
}

/// The invoice to resubmit: latest visible rejected invoice
pub fn latest_rejected_invoice(invoices: &[Invoice], now: DateTime<Utc>) -> Option<&Invoice> {
    visible_invoices(invoices, now)
        .into_iter()
        .rev()
        .find(|inv| inv.status == InvoiceStatus::Rejected)
}

/// Whether the rental phase has started: any `RNT-` invoice exists,
/// visible or not
pub fn is_rental_active(invoices: &[Invoice]) -> bool {
    invoices.iter().any(|inv| inv.is_rental())
}

/// Effective pricing for a rent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// The space's base monthly price
    pub original_price: f64,
    /// Payment-plan override from the latest invoice, when it differs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
}

/// Price quote from the chronologically latest invoice
///
/// The invoice's `price` field only counts as a discount when present and
/// different from the base price. "Latest" is by release date ascending,
/// not raw array position.
pub fn invoice_price(invoices: &[Invoice], base_price: f64) -> PriceQuote {
    let latest = invoices.iter().max_by_key(|inv| {
        parse_release_date(&inv.release_date).unwrap_or(DateTime::<Utc>::MIN_UTC)
    });
    let discounted_price = latest
        .and_then(|inv| inv.price)
        .filter(|price| *price != base_price);
    PriceQuote {
        original_price: base_price,
        discounted_price,
    }
}
