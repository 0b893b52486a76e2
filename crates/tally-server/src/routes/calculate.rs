//! Calculate Routes - validated arithmetic dispatch
//!
//! HTTP handler that delegates validation and dispatch to the domain and
//! forwards successful results to the history ledger.

use axum::{extract::State, routing::post, Json, Router};
use tally::Calculation;

use crate::error::ApiError;
use crate::models::{CalculateRequest, CalculationResponse};
use crate::AppState;

/// Validate and execute a calculation
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation executed", body = CalculationResponse),
        (status = 400, description = "Validation failure or illegal calculation", body = crate::models::ErrorResponse),
        (status = 500, description = "Internal calculation fault", body = crate::models::ErrorResponse)
    ),
    tag = "Calculate"
)]
pub async fn calculate(
    State(state): State<AppState>,
    Json(payload): Json<CalculateRequest>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let calculation = Calculation::evaluate(&payload.into())?;

    // Only successful calculations reach the ledger; validation failures
    // above leave no trace in history.
    state.history.record(&calculation).await?;

    Ok(Json(CalculationResponse::from(&calculation)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}
