//! Notification CRUD and preference management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use markethub_core::result::AppResult;
use markethub_core::types::pagination::{PageRequest, PageResponse};
use markethub_database::repositories::notification::NotificationRepository;
use markethub_entity::notification::{Notification, NotificationPreference};

use crate::context::RequestContext;

/// Manages user notifications and preferences.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Lists notifications for the current user.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.notif_repo.find_by_user(ctx.user_id, page).await
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notif_repo.count_unread(ctx.user_id).await
    }

    /// Marks a notification as read.
    pub async fn mark_read(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        self.notif_repo.mark_read(notification_id, ctx.user_id).await
    }

    /// Marks all of the current user's notifications as read.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.notif_repo.mark_all_read(ctx.user_id).await
    }

    /// Dismisses (deletes) a notification.
    pub async fn dismiss(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        self.notif_repo.dismiss(notification_id, ctx.user_id).await
    }

    /// Gets the user's notification preferences, falling back to defaults
    /// when nothing has been stored yet.
    pub async fn get_preferences(&self, ctx: &RequestContext) -> AppResult<NotificationPreference> {
        Ok(self
            .notif_repo
            .get_preferences(ctx.user_id)
            .await?
            .unwrap_or_else(|| NotificationPreference::default_for_user(ctx.user_id)))
    }

    /// Replaces the user's notification preferences.
    pub async fn update_preferences(
        &self,
        ctx: &RequestContext,
        mut prefs: NotificationPreference,
    ) -> AppResult<NotificationPreference> {
        // The record always belongs to the requesting user.
        prefs.user_id = ctx.user_id;

        let stored = self.notif_repo.upsert_preferences(&prefs).await?;
        info!(user_id = %ctx.user_id, enabled = stored.enabled,
              threshold = stored.relevance_threshold, "Preferences updated");
        Ok(stored)
    }
}
