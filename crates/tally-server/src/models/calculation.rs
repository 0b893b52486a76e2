//! Calculation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tally::{Calculation, HistoryRecord, Operation};
use utoipa::ToSchema;

/// Body of `POST /calculate`.
///
/// Operands and operation are decoded as raw JSON values so the domain
/// validator, not serde, decides how a malformed request fails. Missing
/// fields decode as null and fail validation the same way.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CalculateRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "add")]
    pub operation: serde_json::Value,
    #[serde(default)]
    #[schema(value_type = f64, example = 2.0)]
    pub a: serde_json::Value,
    #[serde(default)]
    #[schema(value_type = f64, example = 3.0)]
    pub b: serde_json::Value,
}

impl From<CalculateRequest> for tally::CalculationRequest {
    fn from(req: CalculateRequest) -> Self {
        Self {
            operation: req.operation,
            a: req.a,
            b: req.b,
        }
    }
}

/// Successful `POST /calculate` response
#[derive(Debug, Serialize, ToSchema)]
pub struct CalculationResponse {
    pub result: f64,
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
}

impl From<&Calculation> for CalculationResponse {
    fn from(calc: &Calculation) -> Self {
        Self {
            result: calc.result,
            operation: calc.operation,
            a: calc.a,
            b: calc.b,
        }
    }
}

/// `GET /history` response
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub calculations: Vec<HistoryRecord>,
    pub total: usize,
}

/// `GET /health` response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured error body, shared by every failure path
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
