//! Notification inbox and preference management.

pub mod service;

pub use service::NotificationService;
