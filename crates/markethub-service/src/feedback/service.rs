//! Client feedback operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_database::repositories::campaign::CampaignRepository;
use markethub_database::repositories::feedback::FeedbackRepository;
use markethub_entity::feedback::{ClientFeedback, SubmitFeedback};

/// Manages client feedback for campaigns.
#[derive(Debug, Clone)]
pub struct FeedbackService {
    /// Feedback repository.
    feedback_repo: Arc<FeedbackRepository>,
    /// Campaign repository, for scoping checks.
    campaign_repo: Arc<CampaignRepository>,
}

impl FeedbackService {
    /// Creates a new feedback service.
    pub fn new(
        feedback_repo: Arc<FeedbackRepository>,
        campaign_repo: Arc<CampaignRepository>,
    ) -> Self {
        Self {
            feedback_repo,
            campaign_repo,
        }
    }

    /// Lists feedback for a campaign.
    pub async fn list_for_campaign(&self, campaign_id: Uuid) -> AppResult<Vec<ClientFeedback>> {
        self.ensure_campaign(campaign_id).await?;
        self.feedback_repo.find_by_campaign(campaign_id).await
    }

    /// Submits client feedback for a campaign.
    pub async fn submit(&self, data: SubmitFeedback) -> AppResult<ClientFeedback> {
        if !(1..=5).contains(&data.rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }
        if data.client_name.trim().is_empty() {
            return Err(AppError::validation("Client name cannot be empty"));
        }
        self.ensure_campaign(data.campaign_id).await?;

        let feedback = self.feedback_repo.create(&data).await?;
        info!(feedback_id = %feedback.id, campaign_id = %feedback.campaign_id,
              rating = feedback.rating, "Feedback submitted");
        Ok(feedback)
    }

    async fn ensure_campaign(&self, campaign_id: Uuid) -> AppResult<()> {
        self.campaign_repo
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| AppError::not_found("Campaign not found"))?;
        Ok(())
    }
}
