//! Invoice store access
//!
//! The invoice store is the external REST backend that owns rents, invoices,
//! spaces, providers, and settings. The portal never persists any of this;
//! it reads through [`StoreClient`] and forwards mutations upstream.

mod client;

pub use client::{RentFilter, StoreClient};
