//! Domain Entities
//!
//! - Calculation: a validated, executed arithmetic request
//! - HistoryRecord: a calculation as stored in the ledger

mod calculation;
mod history_record;

pub use calculation::{Calculation, CalculationRequest};
pub use history_record::HistoryRecord;
