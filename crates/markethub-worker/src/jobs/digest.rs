//! Daily digest resolution for batched notification preferences.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use markethub_core::result::AppResult;
use markethub_database::repositories::notification::NotificationRepository;
use markethub_entity::notification::FrequencyLimit;

/// Rolls the past day's unread notifications into one digest entry for
/// every user who asked for daily delivery.
#[derive(Clone)]
pub struct DigestJob {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl DigestJob {
    /// Creates the digest job.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Runs one digest pass. Returns the number of digests produced.
    pub async fn run(&self) -> AppResult<usize> {
        let prefs = self
            .notif_repo
            .find_preferences_by_frequency(FrequencyLimit::Daily)
            .await?;

        let since = Utc::now() - Duration::days(1);
        let mut produced = 0;

        for pref in prefs {
            let unread = match self.notif_repo.count_unread_since(pref.user_id, since).await {
                Ok(n) => n,
                Err(e) => {
                    warn!(user_id = %pref.user_id, error = %e,
                          "Failed to count notifications for digest");
                    continue;
                }
            };
            if unread == 0 {
                continue;
            }

            // Digest id is deterministic per user per day so a re-run of
            // the job never duplicates the entry.
            let day = Utc::now().format("%Y-%m-%d");
            let digest_id = Uuid::new_v5(
                &Uuid::NAMESPACE_OID,
                format!("digest:{}:{}", pref.user_id, day).as_bytes(),
            );

            let result = self
                .notif_repo
                .create(
                    digest_id,
                    pref.user_id,
                    Some("digest"),
                    "Your daily insight digest",
                    &format!("You have {unread} unread insight notifications from the last day"),
                    None,
                )
                .await;

            match result {
                Ok(_) => produced += 1,
                Err(e) => {
                    warn!(user_id = %pref.user_id, error = %e, "Failed to store digest");
                }
            }
        }

        info!(produced, "Daily digest pass complete");
        Ok(produced)
    }
}
