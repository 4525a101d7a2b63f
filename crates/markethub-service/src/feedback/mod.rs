//! Client feedback collection.

pub mod service;

pub use service::FeedbackService;
