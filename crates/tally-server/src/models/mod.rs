//! Tally API Data Models
//!
//! Wire DTOs for the HTTP surface. Domain entities live in the `tally` crate;
//! these types only shape requests and responses.

mod calculation;

pub use calculation::*;
