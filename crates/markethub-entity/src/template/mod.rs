//! Email template domain entities.

pub mod model;

pub use model::{CreateEmailTemplate, EmailTemplate, UpdateEmailTemplate};
