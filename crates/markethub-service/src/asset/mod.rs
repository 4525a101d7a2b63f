//! Marketing asset management.

pub mod service;

pub use service::AssetService;
