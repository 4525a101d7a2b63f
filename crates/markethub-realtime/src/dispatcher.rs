//! Notification dispatcher — routes insight alerts to sockets or storage.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};
use uuid::Uuid;

use markethub_core::config::NotificationsConfig;
use markethub_core::result::AppResult;
use markethub_database::repositories::notification::NotificationRepository;
use markethub_service::insight::fanout::{AlertBroadcast, InsightAlert};

use crate::connection::ConnectionManager;
use crate::message::OutboundMessage;

/// Dispatches alerts to online users via WebSocket and persists a
/// notification row for everyone else (and also for online users, so the
/// REST inbox stays consistent with what was pushed).
pub struct NotificationDispatcher {
    /// Connection manager for socket delivery.
    connections: Arc<ConnectionManager>,
    /// Notification repository for persistence.
    notif_repo: Arc<NotificationRepository>,
    /// Persistence settings.
    config: NotificationsConfig,
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher").finish()
    }
}

impl NotificationDispatcher {
    /// Create a new dispatcher.
    pub fn new(
        connections: Arc<ConnectionManager>,
        notif_repo: Arc<NotificationRepository>,
        config: NotificationsConfig,
    ) -> Self {
        Self {
            connections,
            notif_repo,
            config,
        }
    }

    /// Persist the alert as an inbox row.
    ///
    /// Insertion is idempotent on the alert's deterministic id, so a
    /// re-delivered alert never duplicates the inbox entry.
    async fn persist(&self, user_id: Uuid, alert: &InsightAlert) -> AppResult<()> {
        let payload = json!({
            "link": alert.link,
            "relevance_score": alert.relevance_score,
        });
        self.notif_repo
            .create(
                alert.id,
                user_id,
                alert.category.as_deref(),
                &alert.title,
                &alert.message,
                Some(&payload),
            )
            .await?;
        Ok(())
    }

    /// Push an unread-count refresh to a user's open connections.
    pub async fn send_unread_count(&self, user_id: Uuid) {
        match self.notif_repo.count_unread(user_id).await {
            Ok(count) => {
                self.connections
                    .send_to_user(user_id, OutboundMessage::UnreadCount { count });
            }
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Failed to refresh unread count");
            }
        }
    }
}

#[async_trait]
impl AlertBroadcast for NotificationDispatcher {
    async fn deliver(&self, user_id: Uuid, alert: InsightAlert) -> AppResult<()> {
        let online = self.connections.is_online(user_id);

        if online || self.config.persist_for_offline {
            self.persist(user_id, &alert).await?;
        }

        if online {
            let msg = OutboundMessage::Notification {
                id: alert.id,
                category: alert.category.clone(),
                title: alert.title.clone(),
                message: alert.message.clone(),
                payload: Some(json!({
                    "link": alert.link,
                    "relevance_score": alert.relevance_score,
                })),
                timestamp: alert.timestamp,
            };
            let delivered = self.connections.send_to_user(user_id, msg);
            debug!(user_id = %user_id, connections = delivered, "Alert pushed");
        }

        Ok(())
    }
}
