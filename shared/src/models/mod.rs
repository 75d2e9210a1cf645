//! Domain models
//!
//! Wire shapes mirroring the invoice store's REST payloads. Field names are
//! camelCase on the wire; release dates stay raw strings because date parsing
//! is fail-open and belongs to the billing core.

mod invoice;
mod provider;
mod rent;
mod settings;
mod space;

pub use invoice::{Invoice, InvoiceKind, InvoiceStatus, RENTAL_PREFIX, SETUP_PREFIX};
pub use provider::Provider;
pub use rent::{Rent, RentParty, RentSpace, RentState};
pub use settings::PortalSettings;
pub use space::{PaymentPlan, Space};
