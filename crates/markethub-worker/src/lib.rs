//! # markethub-worker
//!
//! Cron-scheduled maintenance jobs: the daily digest for batched
//! notification preferences, and retention cleanup for stored
//! notifications and activity entries.

pub mod jobs;
pub mod scheduler;

pub use scheduler::CronScheduler;
