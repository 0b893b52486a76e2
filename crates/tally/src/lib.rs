//! Tally Domain Library
//!
//! Core domain types and interfaces for the Tally calculator API.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Calculation, HistoryRecord)
//!   - `value_objects/`: Immutable value types (Operation)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: History ledger access interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use tally::{Calculation, CalculationRequest, Operation};
//! use tally::ports::HistoryRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Calculation, CalculationRequest, DomainError, HistoryRecord, Operation};
pub use ports::HistoryRepository;
