//! Domain Layer
//!
//! Pure business entities and logic, free of transport concerns.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{Calculation, CalculationRequest, HistoryRecord};
pub use errors::DomainError;
pub use value_objects::Operation;
