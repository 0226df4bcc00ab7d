use crate::core::prelude::*;
use axum::{
    routing::{get, post},
    Router,
};

pub mod error;
pub mod receipts;

/// Builds the application router.
///
/// * `POST /receipts/process` stores a receipt and returns its id.
/// * `GET /receipts/{id}/points` returns the points for a stored receipt.
///
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(receipts::process))
        .route("/receipts/{id}/points", get(receipts::points))
        .with_state(state)
}
