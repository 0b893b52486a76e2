//! History Routes - read-back of the calculation ledger

use axum::{extract::State, routing::get, Json, Router};

use crate::error::ApiError;
use crate::models::HistoryResponse;
use crate::AppState;

/// List all recorded calculations in insertion order
#[utoipa::path(
    get,
    path = "/history",
    responses(
        (status = 200, description = "All recorded calculations", body = HistoryResponse)
    ),
    tag = "History"
)]
pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let (calculations, total) = state.history.list().await?;

    Ok(Json(HistoryResponse {
        calculations,
        total,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/history", get(list_history))
}
