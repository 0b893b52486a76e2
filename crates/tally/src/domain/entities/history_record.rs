//! HistoryRecord - a calculation as stored in the ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Calculation, Operation};

/// One entry in the calculation history.
///
/// Created exactly once after a successful calculation, immutable thereafter.
/// `id` is assigned by the ledger in strictly increasing order starting at 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HistoryRecord {
    pub id: u64,
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Build the record for a completed calculation, stamped now.
    pub fn new(id: u64, calculation: &Calculation) -> Self {
        Self {
            id,
            operation: calculation.operation,
            a: calculation.a,
            b: calculation.b,
            result: calculation.result,
            timestamp: Utc::now(),
        }
    }
}
