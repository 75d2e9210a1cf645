//! Space API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::Space;

use crate::billing;
use crate::core::ServerState;
use crate::utils::AppResult;

/// Catalog entry with display pricing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceView {
    #[serde(flatten)]
    pub space: Space,
    /// Tax-inclusive monthly price
    pub price_with_tax: f64,
    /// Tax portion of the monthly price
    pub tax_amount: f64,
    /// Pricing for each offered commitment term
    pub plans: Vec<billing::PlanPricing>,
}

fn space_view(space: Space, ppn: Option<f64>) -> SpaceView {
    let plans = space
        .payment_plans
        .iter()
        .map(|plan| billing::plan_pricing(space.price, *plan))
        .collect();
    SpaceView {
        price_with_tax: billing::price_with_tax(space.price, ppn),
        tax_amount: billing::tax_amount(space.price, ppn),
        plans,
        space,
    }
}

/// GET /api/spaces - full catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SpaceView>>> {
    let spaces = state.store.list_spaces().await?;
    let settings = state.settings().await;
    Ok(Json(
        spaces
            .into_iter()
            .map(|space| space_view(space, settings.ppn))
            .collect(),
    ))
}

/// GET /api/spaces/{id} - single catalog entry
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SpaceView>> {
    let space = state.store.get_space(&id).await?;
    let settings = state.settings().await;
    Ok(Json(space_view(space, settings.ppn)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PaymentPlan;

    #[test]
    fn test_space_view_pricing() {
        let space = Space {
            id: "space-1".to_string(),
            name: "Rack A-12".to_string(),
            provider_id: "prov-1".to_string(),
            price: 1_000_000.0,
            description: None,
            location: None,
            payment_plans: vec![
                PaymentPlan {
                    months: 3,
                    discount_percent: 10.0,
                },
                PaymentPlan {
                    months: 12,
                    discount_percent: 20.0,
                },
            ],
        };
        let view = space_view(space, Some(11.0));
        assert_eq!(view.price_with_tax, 1_110_000.0);
        assert_eq!(view.tax_amount, 110_000.0);
        assert_eq!(view.plans.len(), 2);
        assert_eq!(view.plans[1].total, 9_600_000.0);
        assert_eq!(view.plans[1].monthly_equivalent, 800_000.0);
    }
}
