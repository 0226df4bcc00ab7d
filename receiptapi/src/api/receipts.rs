use crate::{core::prelude::*, domain::prelude::*};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use models::{PointsResponse, ProcessResponse};

/// Response bodies for the receipts API.
pub mod models {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Serialize, Debug)]
    pub struct ProcessResponse {
        pub id: String,
    }

    #[derive(Deserialize, Serialize, Debug)]
    pub struct PointsResponse {
        pub points: i64,
    }
}

/// Stores a submitted receipt.
///
/// A body that is not a JSON receipt and a receipt with empty required
/// fields are both rejected as invalid input.
///
pub async fn process(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected malformed receipt");
        Error::InvalidInput(rejection.body_text())
    })?;

    let retailer = receipt.retailer.clone();
    let id = state.store.submit(receipt).inspect_err(|err| {
        tracing::warn!(error = %err, "rejected incomplete receipt");
    })?;

    tracing::info!(%id, %retailer, "processed receipt");
    Ok(Json(ProcessResponse { id }))
}

/// Returns the points awarded for a stored receipt.
pub async fn points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let points = state.store.points(&id).inspect_err(|_| {
        tracing::warn!(%id, "points requested for unknown receipt");
    })?;

    tracing::debug!(%id, points, "calculated points");
    Ok(Json(PointsResponse { points }))
}
