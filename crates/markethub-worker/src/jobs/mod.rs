//! Scheduled job implementations.

pub mod cleanup;
pub mod digest;

pub use cleanup::CleanupJob;
pub use digest::DigestJob;
