//! Campaign cost and revenue tracking.

pub mod service;

pub use service::FinanceService;
