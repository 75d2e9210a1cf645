use super::*;
use chrono::{DateTime, Duration, TimeZone, Utc};
use shared::models::{Invoice, InvoiceStatus, RentState};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn at(offset: Duration) -> String {
    (now() + offset).to_rfc3339()
}

fn invoice(id: &str, release_date: impl Into<String>, status: &str) -> Invoice {
    Invoice {
        invoice_id: id.to_string(),
        release_date: release_date.into(),
        status: InvoiceStatus::from(status),
        paid_at: None,
        verified_by: None,
        proof_of_paid: None,
        price: None,
    }
}

fn priced(id: &str, release_date: impl Into<String>, status: &str, price: f64) -> Invoice {
    Invoice {
        price: Some(price),
        ..invoice(id, release_date, status)
    }
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_released_invoice_is_visible() {
    assert!(is_invoice_visible(&at(Duration::days(-30)), now()));
    assert!(is_invoice_visible(&at(Duration::seconds(-1)), now()));
    assert!(is_invoice_visible(&at(Duration::zero()), now()));
}

#[test]
fn test_lookahead_window_boundary() {
    // Exactly 7 days out is still visible; one second past is not
    assert!(is_invoice_visible(&at(Duration::days(7)), now()));
    assert!(!is_invoice_visible(&at(Duration::days(7) + Duration::seconds(1)), now()));
    assert!(!is_invoice_visible(&at(Duration::days(30)), now()));
}

#[test]
fn test_days_until_release_uses_ceiling() {
    // 6 hours from now counts as "in 1 day", not "in 0 days"
    assert_eq!(days_until_release(&at(Duration::hours(6)), now()), 1);
    assert_eq!(days_until_release(&at(Duration::days(1)), now()), 1);
    assert_eq!(
        days_until_release(&at(Duration::days(1) + Duration::seconds(1)), now()),
        2
    );
    assert_eq!(days_until_release(&at(Duration::days(7)), now()), 7);
}

#[test]
fn test_days_until_release_zero_once_released() {
    assert_eq!(days_until_release(&at(Duration::zero()), now()), 0);
    assert_eq!(days_until_release(&at(Duration::days(-3)), now()), 0);
}

#[test]
fn test_unparsable_date_fails_open() {
    assert!(is_invoice_visible("not-a-date", now()));
    assert!(is_invoice_visible("", now()));
    assert_eq!(days_until_release("not-a-date", now()), 0);
}

#[test]
fn test_alternate_date_formats_accepted() {
    assert_eq!(days_until_release("2024-06-16 12:00:00", now()), 1);
    // Date-only releases at midnight, already past at noon
    assert_eq!(days_until_release("2024-06-15", now()), 0);
}

#[test]
fn test_days_until_release_monotonic_as_now_advances() {
    let release = at(Duration::days(5));
    let mut previous = i64::MAX;
    for hour in 0..=(6 * 24) {
        let current = days_until_release(&release, now() + Duration::hours(hour));
        assert!(current <= previous, "countdown went up at hour {}", hour);
        previous = current;
    }
    assert_eq!(previous, 0);
}

#[test]
fn test_visible_invoices_sorted_by_release_date() {
    let invoices = vec![
        invoice("RNT-3", at(Duration::days(-1)), "unpaid"),
        invoice("REQ-1", at(Duration::days(-90)), "verified"),
        invoice("RNT-2", at(Duration::days(-30)), "verified"),
        invoice("RNT-4", at(Duration::days(30)), "unpaid"),
    ];
    let visible = visible_invoices(&invoices, now());
    let ids: Vec<&str> = visible.iter().map(|inv| inv.invoice_id.as_str()).collect();
    assert_eq!(ids, ["REQ-1", "RNT-2", "RNT-3"]);
}

// ============================================================================
// Status resolver
// ============================================================================

#[test]
fn test_no_invoices_is_unknown() {
    assert_eq!(resolve_rent_state(&[], now()), RentState::Unknown);
}

#[test]
fn test_setup_invoice_status_passes_through() {
    for status in ["unpaid", "paid", "pending", "verified", "rejected"] {
        let invoices = vec![invoice("REQ-1", at(Duration::days(-1)), status)];
        assert_eq!(
            resolve_rent_state(&invoices, now()),
            RentState::Invoice(InvoiceStatus::from(status)),
            "setup status {} should drive the rent",
            status
        );
    }
}

#[test]
fn test_unknown_setup_status_passes_through_verbatim() {
    let invoices = vec![invoice("REQ-1", at(Duration::days(-1)), "escalated")];
    assert_eq!(
        resolve_rent_state(&invoices, now()),
        RentState::Invoice(InvoiceStatus::Other("escalated".to_string()))
    );
}

#[test]
fn test_far_future_setup_invoice_means_active() {
    // The only invoice releases in 30 days, outside the window
    let invoices = vec![invoice("REQ-1", at(Duration::days(30)), "unpaid")];
    assert_eq!(resolve_rent_state(&invoices, now()), RentState::Active);
}

#[test]
fn test_unpaid_rental_means_requires_payment() {
    // Verified setup yesterday, unpaid rental released today
    let invoices = vec![
        invoice("REQ-1", at(Duration::days(-1)), "verified"),
        invoice("RNT-1", at(Duration::zero()), "unpaid"),
    ];
    assert_eq!(resolve_rent_state(&invoices, now()), RentState::RequiresPayment);
    let next = next_unpaid_invoice(&invoices, now()).expect("payable invoice");
    assert_eq!(next.invoice_id, "RNT-1");
}

#[test]
fn test_all_verified_means_completed() {
    let invoices = vec![
        invoice("REQ-1", at(Duration::days(-60)), "verified"),
        invoice("RNT-1", at(Duration::days(-30)), "verified"),
        invoice("RNT-2", at(Duration::days(-1)), "verified"),
    ];
    assert_eq!(resolve_rent_state(&invoices, now()), RentState::Completed);
}

#[test]
fn test_pending_rental_means_pending_verification() {
    let invoices = vec![
        invoice("REQ-1", at(Duration::days(-60)), "verified"),
        invoice("RNT-1", at(Duration::days(-30)), "pending"),
        invoice("RNT-2", at(Duration::days(-1)), "unpaid"),
    ];
    // Pending verification outranks the payment gap
    assert_eq!(
        resolve_rent_state(&invoices, now()),
        RentState::PendingVerification
    );
}

#[test]
fn test_pending_setup_does_not_outrank_unpaid_rental() {
    // Only pending RENTAL invoices trigger the verification state
    let invoices = vec![
        invoice("REQ-1", at(Duration::days(-60)), "pending"),
        invoice("RNT-1", at(Duration::days(-1)), "unpaid"),
    ];
    assert_eq!(resolve_rent_state(&invoices, now()), RentState::RequiresPayment);
}

#[test]
fn test_paid_rental_awaiting_verification_is_active() {
    // No unpaid, no pending, not all verified
    let invoices = vec![
        invoice("REQ-1", at(Duration::days(-60)), "verified"),
        invoice("RNT-1", at(Duration::days(-1)), "paid"),
    ];
    assert_eq!(resolve_rent_state(&invoices, now()), RentState::Active);
}

#[test]
fn test_future_rental_not_counted_yet() {
    // The upcoming cycle (outside the window) must not flip the status
    let invoices = vec![
        invoice("REQ-1", at(Duration::days(-60)), "verified"),
        invoice("RNT-1", at(Duration::days(-30)), "verified"),
        invoice("RNT-2", at(Duration::days(20)), "unpaid"),
    ];
    assert_eq!(resolve_rent_state(&invoices, now()), RentState::Completed);
}

#[test]
fn test_malformed_prefix_falls_back_to_latest_status() {
    let invoices = vec![
        invoice("XYZ-1", at(Duration::days(-2)), "paid"),
        invoice("XYZ-2", at(Duration::days(-1)), "rejected"),
    ];
    assert_eq!(
        resolve_rent_state(&invoices, now()),
        RentState::Invoice(InvoiceStatus::Rejected)
    );
}

#[test]
fn test_resolver_ignores_source_order() {
    // Insertion order is scrambled; chronology must win
    let invoices = vec![
        invoice("RNT-1", at(Duration::zero()), "unpaid"),
        invoice("REQ-1", at(Duration::days(-1)), "verified"),
    ];
    assert_eq!(resolve_rent_state(&invoices, now()), RentState::RequiresPayment);
}

// ============================================================================
// Actionable invoice helpers
// ============================================================================

#[test]
fn test_has_unpaid_respects_visibility() {
    let invoices = vec![invoice("RNT-1", at(Duration::days(20)), "unpaid")];
    assert!(!has_unpaid_invoices(&invoices, now()));
    let invoices = vec![invoice("RNT-1", at(Duration::days(3)), "unpaid")];
    assert!(has_unpaid_invoices(&invoices, now()));
}

#[test]
fn test_next_unpaid_is_earliest() {
    let invoices = vec![
        invoice("RNT-2", at(Duration::days(-1)), "unpaid"),
        invoice("RNT-1", at(Duration::days(-30)), "unpaid"),
        invoice("REQ-1", at(Duration::days(-60)), "verified"),
    ];
    let next = next_unpaid_invoice(&invoices, now()).expect("payable invoice");
    assert_eq!(next.invoice_id, "RNT-1");
}

#[test]
fn test_latest_rejected_wins() {
    let invoices = vec![
        invoice("RNT-1", at(Duration::days(-30)), "rejected"),
        invoice("RNT-2", at(Duration::days(-1)), "rejected"),
    ];
    assert!(has_rejected_invoices(&invoices, now()));
    let rejected = latest_rejected_invoice(&invoices, now()).expect("rejected invoice");
    assert_eq!(rejected.invoice_id, "RNT-2");
}

#[test]
fn test_no_actionable_invoices() {
    let invoices = vec![invoice("REQ-1", at(Duration::days(-1)), "verified")];
    assert!(next_unpaid_invoice(&invoices, now()).is_none());
    assert!(latest_rejected_invoice(&invoices, now()).is_none());
}

#[test]
fn test_rental_active_ignores_visibility() {
    let invoices = vec![
        invoice("REQ-1", at(Duration::days(-60)), "verified"),
        invoice("RNT-1", at(Duration::days(30)), "unpaid"),
    ];
    assert!(is_rental_active(&invoices));

    let setup_only = vec![invoice("REQ-1", at(Duration::days(-60)), "verified")];
    assert!(!is_rental_active(&setup_only));
}

// ============================================================================
// Price quote
// ============================================================================

#[test]
fn test_invoice_price_without_override() {
    let invoices = vec![invoice("RNT-1", at(Duration::days(-1)), "unpaid")];
    let quote = invoice_price(&invoices, 500_000.0);
    assert_eq!(quote.original_price, 500_000.0);
    assert_eq!(quote.discounted_price, None);
}

#[test]
fn test_invoice_price_with_discount() {
    let invoices = vec![
        invoice("REQ-1", at(Duration::days(-30)), "verified"),
        priced("RNT-1", at(Duration::days(-1)), "unpaid", 400_000.0),
    ];
    let quote = invoice_price(&invoices, 500_000.0);
    assert_eq!(quote.discounted_price, Some(400_000.0));
}

#[test]
fn test_invoice_price_equal_to_base_is_not_a_discount() {
    let invoices = vec![priced("RNT-1", at(Duration::days(-1)), "unpaid", 500_000.0)];
    let quote = invoice_price(&invoices, 500_000.0);
    assert_eq!(quote.discounted_price, None);
}

#[test]
fn test_invoice_price_picks_chronological_latest() {
    // Raw order has the old invoice last; chronology must win
    let invoices = vec![
        priced("RNT-2", at(Duration::days(-1)), "unpaid", 400_000.0),
        priced("RNT-1", at(Duration::days(-30)), "verified", 450_000.0),
    ];
    let quote = invoice_price(&invoices, 500_000.0);
    assert_eq!(quote.discounted_price, Some(400_000.0));
}

#[test]
fn test_invoice_price_empty_list() {
    let quote = invoice_price(&[], 500_000.0);
    assert_eq!(quote.original_price, 500_000.0);
    assert_eq!(quote.discounted_price, None);
}

// ============================================================================
// Tax and plan pricing
// ============================================================================

#[test]
fn test_price_with_tax_null_rate() {
    assert_eq!(price_with_tax(100_000.0, None), 100_000.0);
    assert_eq!(tax_amount(100_000.0, None), 0.0);
}

#[test]
fn test_price_with_tax_eleven_percent() {
    assert_eq!(price_with_tax(100_000.0, Some(11.0)), 111_000.0);
    assert_eq!(tax_amount(100_000.0, Some(11.0)), 11_000.0);
}

#[test]
fn test_tax_additivity_invariant() {
    let prices = [0.0, 1.0, 99_999.0, 100_000.0, 1_234_567.0];
    let rates = [None, Some(0.0), Some(10.0), Some(11.0), Some(21.5), Some(100.0)];
    for price in prices {
        for rate in rates {
            assert_eq!(
                price_with_tax(price, rate),
                price + tax_amount(price, rate),
                "invariant broke for price={} rate={:?}",
                price,
                rate
            );
        }
    }
}

#[test]
fn test_plan_pricing_annual_discount() {
    let plan = shared::models::PaymentPlan {
        months: 12,
        discount_percent: 20.0,
    };
    let pricing = plan_pricing(1_000_000.0, plan);
    assert_eq!(pricing.total, 9_600_000.0);
    assert_eq!(pricing.monthly_equivalent, 800_000.0);
}

#[test]
fn test_plan_pricing_no_discount() {
    let plan = shared::models::PaymentPlan {
        months: 3,
        discount_percent: 0.0,
    };
    let pricing = plan_pricing(500_000.0, plan);
    assert_eq!(pricing.total, 1_500_000.0);
    assert_eq!(pricing.monthly_equivalent, 500_000.0);
}
