//! Value Objects
//!
//! Immutable value types for the calculation domain.

mod operation;

pub use operation::Operation;
