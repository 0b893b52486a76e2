//! Repository Ports
//!
//! Abstract interfaces for the history ledger.

mod history_repository;

pub use history_repository::*;
