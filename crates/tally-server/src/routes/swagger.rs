//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CalculateRequest, CalculationResponse, ErrorResponse, HealthResponse, HistoryResponse,
};
use tally::{HistoryRecord, Operation};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        super::calculate::calculate,
        super::history::list_history,
    ),
    components(schemas(
        CalculateRequest,
        CalculationResponse,
        HistoryResponse,
        HealthResponse,
        ErrorResponse,
        HistoryRecord,
        Operation,
    )),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Calculate", description = "Validated arithmetic dispatch"),
        (name = "History", description = "In-memory calculation ledger")
    )
)]
pub struct ApiDoc;
