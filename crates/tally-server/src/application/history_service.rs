//! History Application Service (Use Case)
//!
//! Orchestrates ledger operations for the HTTP handlers.

use std::sync::Arc;

use tally::{Calculation, DomainError, HistoryRecord, HistoryRepository};

/// Application service for the calculation history
pub struct HistoryService<R: HistoryRepository> {
    repo: Arc<R>,
}

impl<R: HistoryRepository> HistoryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Append a completed calculation to the ledger.
    pub async fn record(&self, calculation: &Calculation) -> Result<HistoryRecord, DomainError> {
        let record = self.repo.record(calculation).await?;

        tracing::info!(
            "Recorded calculation #{}: {} {} {} = {}",
            record.id,
            record.a,
            record.operation,
            record.b,
            record.result
        );

        Ok(record)
    }

    /// All records in insertion order, plus the total count.
    pub async fn list(&self) -> Result<(Vec<HistoryRecord>, usize), DomainError> {
        self.repo.list().await
    }
}
