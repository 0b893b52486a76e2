//! API error responses
//!
//! Maps domain errors onto the `{error, message}` wire shape with the right
//! status code. Every foreseeable failure is converted here; nothing bubbles
//! past a handler as anything but a structured response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tally::DomainError;

use crate::models::ErrorResponse;

/// A structured error response: status code plus `{error, message}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: "Endpoint not found".to_string(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_ERROR",
            message: "An unexpected error occurred".to_string(),
        }
    }

    /// Generic failure of the calculate endpoint. The underlying fault is
    /// logged at the call site; the caller only sees this shape.
    pub fn calculation() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "CALCULATION_ERROR",
            message: "An error occurred with the calculation endpoint".to_string(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        if err.is_client_error() {
            Self {
                status: StatusCode::BAD_REQUEST,
                code: err.code(),
                message: err.to_string(),
            }
        } else {
            tracing::error!("Calculation error: {}", err);
            Self::calculation()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.code.to_string(),
                message: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_map_to_400() {
        let err = ApiError::from(DomainError::InvalidOperands);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.message, "Invalid types provided for operands");

        let err = ApiError::from(DomainError::IllegalCalculation);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "ILLEGAL_CALCULATION");
        assert_eq!(err.message, "Cannot divide by zero");
    }

    #[test]
    fn repository_failures_are_surfaced_generically() {
        let err = ApiError::from(DomainError::Repository("lock poisoned".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, "CALCULATION_ERROR");
        assert_eq!(
            err.message,
            "An error occurred with the calculation endpoint"
        );
    }
}
