//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Scheduled maintenance task configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the in-process worker runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the daily digest resolution job.
    #[serde(default = "default_digest_cron")]
    pub digest_cron: String,
    /// Cron expression for the retention cleanup job.
    #[serde(default = "default_cleanup_cron")]
    pub cleanup_cron: String,
    /// Delete activity entries older than this many days.
    #[serde(default = "default_activity_retention")]
    pub activity_retention_days: u32,
}

fn default_true() -> bool {
    true
}

fn default_digest_cron() -> String {
    // 07:00 UTC every day
    "0 0 7 * * *".to_string()
}

fn default_cleanup_cron() -> String {
    // 03:30 UTC every day
    "0 30 3 * * *".to_string()
}

fn default_activity_retention() -> u32 {
    90
}
