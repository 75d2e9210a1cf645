//! Rent API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rents", rent_routes())
}

fn rent_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route(
            "/{id}/invoices/{invoice_id}/proof",
            post(handler::submit_proof),
        )
        .route(
            "/{id}/invoices/{invoice_id}/verify",
            post(handler::verify_payment),
        )
}
