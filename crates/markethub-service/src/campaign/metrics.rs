//! Campaign performance metrics aggregation.

use std::sync::Arc;

use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_database::repositories::campaign::CampaignRepository;
use markethub_database::repositories::feedback::FeedbackRepository;
use markethub_database::repositories::finance::FinanceRepository;
use markethub_database::repositories::task::TaskRepository;
use markethub_entity::campaign::CampaignMetrics;

/// Computes aggregated performance figures for campaigns.
#[derive(Debug, Clone)]
pub struct MetricsService {
    /// Campaign repository, for existence checks.
    campaign_repo: Arc<CampaignRepository>,
    /// Finance repository for cost/revenue sums.
    finance_repo: Arc<FinanceRepository>,
    /// Task repository for completion counts.
    task_repo: Arc<TaskRepository>,
    /// Feedback repository for the average rating.
    feedback_repo: Arc<FeedbackRepository>,
}

impl MetricsService {
    /// Creates a new metrics service.
    pub fn new(
        campaign_repo: Arc<CampaignRepository>,
        finance_repo: Arc<FinanceRepository>,
        task_repo: Arc<TaskRepository>,
        feedback_repo: Arc<FeedbackRepository>,
    ) -> Self {
        Self {
            campaign_repo,
            finance_repo,
            task_repo,
            feedback_repo,
        }
    }

    /// Computes the metrics snapshot for one campaign.
    ///
    /// ROI is `(revenue - cost) / cost * 100`, undefined (None) when no
    /// costs have been recorded.
    pub async fn for_campaign(&self, campaign_id: Uuid) -> AppResult<CampaignMetrics> {
        self.campaign_repo
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| AppError::not_found("Campaign not found"))?;

        let total_cost = self.finance_repo.total_cost(campaign_id).await?;
        let total_revenue = self.finance_repo.total_revenue(campaign_id).await?;
        let (task_count, tasks_done) = self.task_repo.count_by_campaign(campaign_id).await?;
        let average_rating = self.feedback_repo.average_rating(campaign_id).await?;

        let roi_percent = if total_cost > 0.0 {
            Some((total_revenue - total_cost) / total_cost * 100.0)
        } else {
            None
        };

        Ok(CampaignMetrics {
            campaign_id,
            total_cost,
            total_revenue,
            roi_percent,
            task_count,
            tasks_done,
            average_rating,
        })
    }
}
