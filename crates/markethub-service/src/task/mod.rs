//! Campaign task management.

pub mod service;

pub use service::TaskService;
