//! Retention cleanup for notifications and activity entries.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use markethub_core::result::AppResult;
use markethub_database::repositories::activity::ActivityRepository;
use markethub_database::repositories::notification::NotificationRepository;

/// Deletes aged notification and activity rows and trims oversized
/// per-user inboxes.
#[derive(Clone)]
pub struct CleanupJob {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
    /// Activity repository.
    activity_repo: Arc<ActivityRepository>,
    /// Notification retention window in days.
    notification_retention_days: u32,
    /// Per-user stored notification cap.
    max_stored_per_user: u32,
    /// Activity retention window in days.
    activity_retention_days: u32,
}

impl CleanupJob {
    /// Creates the cleanup job.
    pub fn new(
        notif_repo: Arc<NotificationRepository>,
        activity_repo: Arc<ActivityRepository>,
        notification_retention_days: u32,
        max_stored_per_user: u32,
        activity_retention_days: u32,
    ) -> Self {
        Self {
            notif_repo,
            activity_repo,
            notification_retention_days,
            max_stored_per_user,
            activity_retention_days,
        }
    }

    /// Runs one cleanup pass. Returns total rows removed.
    pub async fn run(&self) -> AppResult<u64> {
        let notif_cutoff = Utc::now() - Duration::days(self.notification_retention_days as i64);
        let activity_cutoff = Utc::now() - Duration::days(self.activity_retention_days as i64);

        let expired = self.notif_repo.delete_older_than(notif_cutoff).await?;
        let trimmed = self
            .notif_repo
            .trim_per_user(self.max_stored_per_user as i64)
            .await?;
        let activities = self
            .activity_repo
            .delete_older_than(activity_cutoff)
            .await?;

        info!(
            expired_notifications = expired,
            trimmed_notifications = trimmed,
            expired_activities = activities,
            "Retention cleanup complete"
        );

        Ok(expired + trimmed + activities)
    }
}
