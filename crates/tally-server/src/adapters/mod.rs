//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

mod memory;

pub use memory::InMemoryHistoryRepository;
