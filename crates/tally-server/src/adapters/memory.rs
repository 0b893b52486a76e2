//! In-memory History Repository
//!
//! Process-lifetime ledger backing the `/history` endpoint. State is owned
//! by this struct and injected through [`AppState`](crate::AppState), never
//! held in a module-level global, so tests get isolated instances.

use async_trait::async_trait;
use tokio::sync::RwLock;

use tally::{Calculation, DomainError, HistoryRecord, HistoryRepository};

/// Append-only, unbounded in-memory ledger.
///
/// A single write lock covers the length read and the push, so ids are
/// assigned exactly once and gap-free under concurrent `record` calls, and
/// `list` never observes a partially appended record.
pub struct InMemoryHistoryRepository {
    records: RwLock<Vec<HistoryRecord>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn record(&self, calculation: &Calculation) -> Result<HistoryRecord, DomainError> {
        let mut records = self.records.write().await;
        let record = HistoryRecord::new(records.len() as u64, calculation);
        records.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<(Vec<HistoryRecord>, usize), DomainError> {
        let records = self.records.read().await;
        Ok((records.clone(), records.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tally::Operation;

    fn calculation() -> Calculation {
        Calculation {
            operation: Operation::Add,
            a: 2.0,
            b: 3.0,
            result: 5.0,
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids_from_zero() {
        let repo = InMemoryHistoryRepository::new();
        for expected in 0..5u64 {
            let record = repo.record(&calculation()).await.unwrap();
            assert_eq!(record.id, expected);
        }

        let (records, total) = repo.list().await.unwrap();
        assert_eq!(total, 5);
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn repeated_requests_get_distinct_records() {
        let repo = InMemoryHistoryRepository::new();
        let first = repo.record(&calculation()).await.unwrap();
        let second = repo.record(&calculation()).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.operation, second.operation);
        assert_eq!(first.result, second.result);
    }

    #[tokio::test]
    async fn list_snapshot_is_stable() {
        let repo = InMemoryHistoryRepository::new();
        repo.record(&calculation()).await.unwrap();

        let (snapshot, total) = repo.list().await.unwrap();
        repo.record(&calculation()).await.unwrap();

        // the earlier snapshot is unaffected by later appends
        assert_eq!(total, 1);
        assert_eq!(snapshot.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_records_never_duplicate_ids() {
        let repo = Arc::new(InMemoryHistoryRepository::new());

        let mut handles = Vec::new();
        for _ in 0..32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(
                async move { repo.record(&calculation()).await },
            ));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            let record = handle.await.unwrap().unwrap();
            assert!(ids.insert(record.id), "duplicate id {}", record.id);
        }

        let (records, total) = repo.list().await.unwrap();
        assert_eq!(total, 32);
        assert!(records.windows(2).all(|w| w[0].id + 1 == w[1].id));
    }
}
