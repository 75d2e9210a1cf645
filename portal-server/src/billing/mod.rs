//! Billing core
//!
//! Pure decision logic over a rent's invoice list: which invoices are
//! currently relevant, what status the rent presents as, and what amounts
//! are due. Every function takes `now` (and the tax rate) as an explicit
//! parameter; nothing in this module reads the wall clock or performs I/O.

mod pricing;
mod status;
mod visibility;

pub use pricing::{PlanPricing, plan_pricing, price_with_tax, tax_amount};
pub use status::{
    PriceQuote, has_rejected_invoices, has_unpaid_invoices, invoice_price, is_rental_active,
    latest_rejected_invoice, next_unpaid_invoice, resolve_rent_state,
};
pub use visibility::{
    RELEASE_LOOKAHEAD_DAYS, days_until_release, is_invoice_visible, parse_release_date,
    visible_invoices,
};

#[cfg(test)]
mod tests;
