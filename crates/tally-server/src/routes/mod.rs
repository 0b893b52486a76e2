//! Tally API Routes
//!
//! - /health - liveness probe
//! - /calculate - validated arithmetic dispatch
//! - /history - in-memory calculation ledger

pub mod calculate;
pub mod health;
pub mod history;
pub mod swagger;
