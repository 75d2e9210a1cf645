//! Tax and payment-plan price calculations
//!
//! Uses `rust_decimal` internally so percentage math stays exact, with `f64`
//! at the boundary to match the wire shapes. No rounding happens here:
//! prices are formatted (zero fractional digits) at the presentation
//! boundary only.

use rust_decimal::prelude::*;
use shared::models::PaymentPlan;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage/serialization
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Tax amount for a base price: `base * ppn / 100`, `0` when no rate is set
pub fn tax_amount(base_price: f64, ppn: Option<f64>) -> f64 {
    match ppn {
        None => 0.0,
        Some(rate) => to_f64(to_decimal(base_price) * to_decimal(rate) / Decimal::ONE_HUNDRED),
    }
}

/// Tax-inclusive price: the base unchanged when no rate is set
///
/// Holds `price_with_tax(p, r) == p + tax_amount(p, r)` for every input.
pub fn price_with_tax(base_price: f64, ppn: Option<f64>) -> f64 {
    match ppn {
        None => base_price,
        Some(_) => base_price + tax_amount(base_price, ppn),
    }
}

/// Totals for a multi-month payment plan
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPricing {
    pub months: u32,
    pub discount_percent: f64,
    /// Up-front total: `base * (1 - discount/100) * months`
    pub total: f64,
    /// Effective monthly price under the plan
    pub monthly_equivalent: f64,
}

/// Price out a payment plan against a base monthly price
pub fn plan_pricing(base_price: f64, plan: PaymentPlan) -> PlanPricing {
    let multiplier = Decimal::ONE - to_decimal(plan.discount_percent) / Decimal::ONE_HUNDRED;
    let monthly = to_decimal(base_price) * multiplier;
    let total = monthly * Decimal::from(plan.months);
    PlanPricing {
        months: plan.months,
        discount_percent: plan.discount_percent,
        total: to_f64(total),
        monthly_equivalent: to_f64(monthly),
    }
}
