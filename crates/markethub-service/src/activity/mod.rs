//! Activity feed access and the fan-out persistence sink.

pub mod service;

pub use service::{ActivityService, RepositoryActivitySink};
