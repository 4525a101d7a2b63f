//! Notification preference entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::frequency::FrequencyLimit;

/// A user's stored subscription criteria for insight notifications.
///
/// At most one preference record exists per user (enforced by a unique
/// index on `user_id`). Empty criterion lists mean "no opinion" for that
/// dimension: the matcher neither gates nor boosts on them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationPreference {
    /// The owning user.
    pub user_id: Uuid,
    /// Master switch; disabled preferences never match.
    pub enabled: bool,
    /// Acceptable insight categories (hard gate when non-empty).
    pub categories: Vec<String>,
    /// Acceptable property types (hard gate when non-empty).
    pub property_types: Vec<String>,
    /// Preferred locations, matched as case-insensitive substrings.
    pub locations: Vec<String>,
    /// Keywords boosting relevance (never gate).
    pub keyword_matches: Vec<String>,
    /// Minimum accumulated score required to match.
    pub relevance_threshold: i32,
    /// Whether the user wants email delivery.
    pub email_notifications: bool,
    /// Whether the user wants in-app push delivery.
    pub app_notifications: bool,
    /// How often the user wants to be contacted.
    pub frequency_limit: FrequencyLimit,
    /// When the preferences were last updated.
    pub updated_at: DateTime<Utc>,
}

impl NotificationPreference {
    /// Default preferences for a user who has not configured anything:
    /// enabled, no filters, threshold 0, app push on, email off.
    pub fn default_for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            enabled: true,
            categories: Vec::new(),
            property_types: Vec::new(),
            locations: Vec::new(),
            keyword_matches: Vec::new(),
            relevance_threshold: 0,
            email_notifications: false,
            app_notifications: true,
            frequency_limit: FrequencyLimit::Immediate,
            updated_at: Utc::now(),
        }
    }
}
