//! Marketing asset domain entities.

pub mod model;

pub use model::{Asset, CreateAsset};
