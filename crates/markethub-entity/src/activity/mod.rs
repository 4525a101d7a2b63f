//! Activity log domain entities.

pub mod model;

pub use model::{Activity, NewActivity};
