//! Client feedback domain entities.

pub mod model;

pub use model::{ClientFeedback, SubmitFeedback};
