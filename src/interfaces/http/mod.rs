//! HTTP/JSON adapter in front of the [`Ledger`].
//!
//! Stateless: every handler translates a wire payload into a ledger call
//! and the outcome into a status code. Caller errors come back as
//! `400 {"error": ...}`, unknown accounts on reads as `404`, and anything
//! unexpected as an opaque `500` with the details kept server-side.

mod dto;
mod errors;
mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::application::ledger::Ledger;

/// Builds the account API router for the given ledger.
pub fn app(ledger: Arc<Ledger>) -> Router {
    Router::new()
        .route("/accounts", post(routes::create_account))
        .route("/accounts/:id", get(routes::get_account))
        .route("/transfer", post(routes::transfer))
        .layer(Extension(ledger))
        .layer(CatchPanicLayer::custom(errors::panic_response))
}
