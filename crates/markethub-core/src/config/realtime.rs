//! Real-time WebSocket configuration.

use serde::{Deserialize, Serialize};

/// WebSocket engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Per-connection outbound message buffer size.
    #[serde(default = "default_buffer_size")]
    pub channel_buffer_size: usize,
    /// Maximum simultaneous connections per user.
    #[serde(default = "default_max_per_user")]
    pub max_connections_per_user: usize,
    /// Server keepalive ping interval in seconds.
    #[serde(default = "default_ping_interval")]
    pub ping_interval_seconds: u64,
    /// Notification delivery settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Notification persistence and retention settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Persist notifications for users without an open connection.
    #[serde(default = "default_true")]
    pub persist_for_offline: bool,
    /// Delete stored notifications older than this many days.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    /// Keep at most this many stored notifications per user.
    #[serde(default = "default_max_stored")]
    pub max_stored_per_user: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            persist_for_offline: true,
            retention_days: default_retention_days(),
            max_stored_per_user: default_max_stored(),
        }
    }
}

fn default_buffer_size() -> usize {
    64
}

fn default_max_per_user() -> usize {
    4
}

fn default_ping_interval() -> u64 {
    30
}

fn default_retention_days() -> u32 {
    30
}

fn default_max_stored() -> u32 {
    200
}

fn default_true() -> bool {
    true
}
