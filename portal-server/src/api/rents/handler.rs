//! Rent API Handlers
//!
//! The store returns raw rents; these handlers run the billing core over
//! them and serve view models with the derived status, actionable invoices,
//! and tax-inclusive amounts the portal pages bind to.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{Invoice, InvoiceStatus, Rent, RentParty, RentSpace, RentState};
use validator::Validate;

use crate::billing;
use crate::core::ServerState;
use crate::store::RentFilter;
use crate::utils::AppResult;

/// Rent summary with derived billing state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentView {
    pub id: String,
    pub customer: RentParty,
    pub provider: RentParty,
    pub space: RentSpace,
    pub state: RentState,
    pub is_rental_active: bool,
    pub price: billing::PriceQuote,
    pub has_unpaid_invoices: bool,
    pub has_rejected_invoices: bool,
}

/// Invoice enriched with countdown and amount due
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub days_until_release: i64,
    /// Tax-inclusive amount for this cycle (invoice override or base price)
    pub amount_due: f64,
}

/// Full rent view: summary plus the currently relevant invoices
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentDetail {
    #[serde(flatten)]
    pub summary: RentView,
    /// Visible invoices, release date ascending
    pub invoices: Vec<InvoiceView>,
    /// Earliest released invoice awaiting payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payable: Option<InvoiceView>,
    /// Latest invoice whose proof was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_rejected: Option<InvoiceView>,
}

fn rent_view(rent: &Rent, now: DateTime<Utc>) -> RentView {
    RentView {
        id: rent.id.clone(),
        customer: rent.customer.clone(),
        provider: rent.provider.clone(),
        space: rent.space.clone(),
        state: billing::resolve_rent_state(&rent.invoices, now),
        is_rental_active: billing::is_rental_active(&rent.invoices),
        price: billing::invoice_price(&rent.invoices, rent.space.price),
        has_unpaid_invoices: billing::has_unpaid_invoices(&rent.invoices, now),
        has_rejected_invoices: billing::has_rejected_invoices(&rent.invoices, now),
    }
}

fn invoice_view(invoice: &Invoice, base_price: f64, ppn: Option<f64>, now: DateTime<Utc>) -> InvoiceView {
    InvoiceView {
        days_until_release: billing::days_until_release(&invoice.release_date, now),
        amount_due: billing::price_with_tax(invoice.price.unwrap_or(base_price), ppn),
        invoice: invoice.clone(),
    }
}

fn rent_detail(rent: &Rent, ppn: Option<f64>, now: DateTime<Utc>) -> RentDetail {
    let base_price = rent.space.price;
    let invoices = billing::visible_invoices(&rent.invoices, now)
        .into_iter()
        .map(|inv| invoice_view(inv, base_price, ppn, now))
        .collect();
    let next_payable = billing::next_unpaid_invoice(&rent.invoices, now)
        .map(|inv| invoice_view(inv, base_price, ppn, now));
    let latest_rejected = billing::latest_rejected_invoice(&rent.invoices, now)
        .map(|inv| invoice_view(inv, base_price, ppn, now));
    RentDetail {
        summary: rent_view(rent, now),
        invoices,
        next_payable,
        latest_rejected,
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentListQuery {
    pub customer_id: Option<String>,
    pub provider_id: Option<String>,
}

/// GET /api/rents - orders with derived state, optionally filtered
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RentListQuery>,
) -> AppResult<Json<Vec<RentView>>> {
    let filter = RentFilter {
        customer_id: query.customer_id,
        provider_id: query.provider_id,
    };
    let rents = state.store.list_rents(&filter).await?;
    let now = Utc::now();
    Ok(Json(rents.iter().map(|rent| rent_view(rent, now)).collect()))
}

/// GET /api/rents/{id} - full rent view with visible invoices
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<RentDetail>> {
    let rent = state.store.get_rent(&id).await?;
    let settings = state.settings().await;
    Ok(Json(rent_detail(&rent, settings.ppn, Utc::now())))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProofRequest {
    /// Storage key of the uploaded proof image
    #[validate(length(min = 1))]
    pub proof_of_paid: String,
}

/// POST /api/rents/{id}/invoices/{invoice_id}/proof - submit a payment proof
pub async fn submit_proof(
    State(state): State<ServerState>,
    Path((id, invoice_id)): Path<(String, String)>,
    Json(payload): Json<SubmitProofRequest>,
) -> AppResult<Json<RentDetail>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let rent = state.store.get_rent(&id).await?;
    let now = Utc::now();
    let invoice = find_invoice(&rent, &invoice_id)?;

    if !billing::is_invoice_visible(&invoice.release_date, now) {
        return Err(AppError::new(ErrorCode::InvoiceNotReleased)
            .with_detail("invoiceId", invoice_id.clone()));
    }
    // Payable fresh or resubmittable after a rejection
    if !matches!(invoice.status, InvoiceStatus::Unpaid | InvoiceStatus::Rejected) {
        return Err(AppError::new(ErrorCode::InvoiceNotPayable)
            .with_detail("invoiceId", invoice_id.clone())
            .with_detail("status", invoice.status.as_str()));
    }

    let updated = state
        .store
        .submit_payment_proof(&id, &invoice_id, &payload.proof_of_paid)
        .await?;
    let settings = state.settings().await;
    Ok(Json(rent_detail(&updated, settings.ppn, now)))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    /// Staff member recording the decision
    #[validate(length(min = 1))]
    pub verified_by: String,
    pub approve: bool,
}

/// POST /api/rents/{id}/invoices/{invoice_id}/verify - record a staff decision
pub async fn verify_payment(
    State(state): State<ServerState>,
    Path((id, invoice_id)): Path<(String, String)>,
    Json(payload): Json<VerifyPaymentRequest>,
) -> AppResult<Json<RentDetail>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let rent = state.store.get_rent(&id).await?;
    let invoice = find_invoice(&rent, &invoice_id)?;

    if !matches!(invoice.status, InvoiceStatus::Paid | InvoiceStatus::Pending) {
        return Err(AppError::new(ErrorCode::PaymentNotVerifiable)
            .with_detail("invoiceId", invoice_id.clone())
            .with_detail("status", invoice.status.as_str()));
    }

    let updated = state
        .store
        .verify_payment(&id, &invoice_id, &payload.verified_by, payload.approve)
        .await?;
    let settings = state.settings().await;
    Ok(Json(rent_detail(&updated, settings.ppn, Utc::now())))
}

fn find_invoice<'a>(rent: &'a Rent, invoice_id: &str) -> Result<&'a Invoice, AppError> {
    rent.invoices
        .iter()
        .find(|inv| inv.invoice_id == invoice_id)
        .ok_or_else(|| {
            AppError::new(ErrorCode::InvoiceNotFound).with_detail("invoiceId", invoice_id)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_rent() -> Rent {
        Rent {
            id: "rent-1".to_string(),
            customer: RentParty {
                id: "cust-1".to_string(),
                name: "PT Nusantara Data".to_string(),
            },
            provider: RentParty {
                id: "prov-1".to_string(),
                name: "JakartaDC".to_string(),
            },
            space: RentSpace {
                id: "space-1".to_string(),
                name: "Rack A-12".to_string(),
                price: 1_000_000.0,
                location: None,
            },
            invoices: vec![
                Invoice {
                    invoice_id: "REQ-1".to_string(),
                    release_date: "2024-06-14T12:00:00Z".to_string(),
                    status: InvoiceStatus::Verified,
                    paid_at: Some("2024-06-14T15:00:00Z".to_string()),
                    verified_by: Some("staff-1".to_string()),
                    proof_of_paid: Some("proofs/req-1.jpg".to_string()),
                    price: None,
                },
                Invoice {
                    invoice_id: "RNT-1".to_string(),
                    release_date: "2024-06-15T12:00:00Z".to_string(),
                    status: InvoiceStatus::Unpaid,
                    paid_at: None,
                    verified_by: None,
                    proof_of_paid: None,
                    price: Some(800_000.0),
                },
            ],
            created_at: None,
        }
    }

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_rent_view_derivation() {
        let rent = sample_rent();
        let view = rent_view(&rent, test_now());
        assert_eq!(view.state, RentState::RequiresPayment);
        assert!(view.is_rental_active);
        assert!(view.has_unpaid_invoices);
        assert!(!view.has_rejected_invoices);
        assert_eq!(view.price.discounted_price, Some(800_000.0));
    }

    #[test]
    fn test_rent_detail_amounts_include_tax() {
        let rent = sample_rent();
        let detail = rent_detail(&rent, Some(11.0), test_now());
        assert_eq!(detail.invoices.len(), 2);
        let payable = detail.next_payable.expect("payable invoice");
        assert_eq!(payable.invoice.invoice_id, "RNT-1");
        // Override price 800k + 11% PPN
        assert_eq!(payable.amount_due, 888_000.0);
        // Verified setup invoice falls back to the base price
        assert_eq!(detail.invoices[0].amount_due, 1_110_000.0);
    }

    #[test]
    fn test_rent_view_wire_shape() {
        let rent = sample_rent();
        let value = serde_json::to_value(rent_view(&rent, test_now())).unwrap();
        assert_eq!(value["state"], "requires payment");
        assert_eq!(value["isRentalActive"], true);
        assert_eq!(value["price"]["originalPrice"], 1_000_000.0);
        assert_eq!(value["price"]["discountedPrice"], 800_000.0);
    }

    #[test]
    fn test_find_invoice_missing() {
        let rent = sample_rent();
        let err = find_invoice(&rent, "RNT-9").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvoiceNotFound);
    }
}
