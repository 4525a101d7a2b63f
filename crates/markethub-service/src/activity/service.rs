//! Activity feed queries and the repository-backed fan-out sink.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use markethub_core::result::AppResult;
use markethub_core::types::pagination::{PageRequest, PageResponse};
use markethub_database::repositories::activity::ActivityRepository;
use markethub_entity::activity::{Activity, NewActivity};

use crate::context::RequestContext;
use crate::insight::fanout::ActivitySink;

/// Read access to the activity feed.
#[derive(Debug, Clone)]
pub struct ActivityService {
    /// Activity repository.
    activity_repo: Arc<ActivityRepository>,
}

impl ActivityService {
    /// Creates a new activity service.
    pub fn new(activity_repo: Arc<ActivityRepository>) -> Self {
        Self { activity_repo }
    }

    /// Lists the current user's activity feed.
    pub async fn list_for_user(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Activity>> {
        self.activity_repo.find_by_user(ctx.user_id, page).await
    }

    /// Lists activity attached to a campaign.
    pub async fn list_for_campaign(
        &self,
        campaign_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Activity>> {
        self.activity_repo.find_by_campaign(campaign_id, page).await
    }
}

/// [`ActivitySink`] backed by the activity repository.
#[derive(Debug, Clone)]
pub struct RepositoryActivitySink {
    /// Activity repository.
    activity_repo: Arc<ActivityRepository>,
}

impl RepositoryActivitySink {
    /// Creates the sink.
    pub fn new(activity_repo: Arc<ActivityRepository>) -> Self {
        Self { activity_repo }
    }
}

#[async_trait]
impl ActivitySink for RepositoryActivitySink {
    async fn record(&self, entry: NewActivity) -> AppResult<()> {
        self.activity_repo.create(&entry).await?;
        Ok(())
    }
}
