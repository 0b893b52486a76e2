//! Application Services (Use Cases)

mod history_service;

pub use history_service::HistoryService;
