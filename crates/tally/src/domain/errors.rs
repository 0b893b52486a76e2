//! Domain Errors
//!
//! Error types for calculation and ledger operations. Each variant carries a
//! stable wire code so the HTTP layer can surface `{error, message}` bodies
//! without re-deriving the taxonomy.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or both operands are not JSON numbers.
    #[error("Invalid types provided for operands")]
    InvalidOperands,

    /// The requested operation is outside the supported enumeration.
    #[error("Unsupported calculation type provided")]
    UnsupportedOperation,

    /// Well-typed but semantically forbidden: divide with a non-positive
    /// divisor.
    #[error("Cannot divide by zero")]
    IllegalCalculation,

    /// An operation passed validation but has no arithmetic case. Dispatch is
    /// an exhaustive match over [`Operation`], so this cannot be constructed
    /// today; the variant keeps the wire taxonomy complete if the enumeration
    /// and the dispatch table ever drift apart.
    #[error("No arithmetic case for operation: {0}")]
    UnsupportedCalculation(String),

    /// Ledger failure while recording or reading history.
    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    /// Stable error code for the `{error, message}` wire shape.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidOperands | DomainError::UnsupportedOperation => "VALIDATION_ERROR",
            DomainError::IllegalCalculation => "ILLEGAL_CALCULATION",
            DomainError::UnsupportedCalculation(_) => "UNSUPPORTED_CALCULATION",
            DomainError::Repository(_) => "CALCULATION_ERROR",
        }
    }

    /// Whether the caller can recover by resubmitting a corrected request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidOperands
                | DomainError::UnsupportedOperation
                | DomainError::IllegalCalculation
        )
    }
}
