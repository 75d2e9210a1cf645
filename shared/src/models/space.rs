//! Space Model

use serde::{Deserialize, Serialize};

/// Payment plan: pay `months` up front for a percentage discount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlan {
    pub months: u32,
    pub discount_percent: f64,
}

/// Rack-space product (read-only reference data)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: String,
    pub name: String,
    pub provider_id: String,
    /// Base monthly price in currency unit (IDR, no decimal subunits)
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Discount percentages for longer commitment terms
    /// (quarterly/annual payment plans)
    #[serde(default)]
    pub payment_plans: Vec<PaymentPlan>,
}
