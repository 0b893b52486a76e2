//! History Repository Port
//!
//! Abstract interface for the append-only calculation ledger.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Calculation, HistoryRecord};

/// Repository interface for the calculation history.
///
/// The ledger is append-only: records are never updated or deleted. Ids must
/// be assigned strictly monotonically with no gaps or duplicates, even under
/// concurrent `record` calls, and `list` must never observe a partially
/// appended record.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Assign the next id, stamp the current time, append, and return the
    /// stored record.
    async fn record(&self, calculation: &Calculation) -> Result<HistoryRecord, DomainError>;

    /// Snapshot of all records in insertion order, plus the total count.
    async fn list(&self) -> Result<(Vec<HistoryRecord>, usize), DomainError>;
}
