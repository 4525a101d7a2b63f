//! User registration, login, and profile lookup.

pub mod service;

pub use service::{LoginOutcome, RegisterRequest, UserService};
