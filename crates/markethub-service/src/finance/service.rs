//! Cost and revenue entry operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_database::repositories::campaign::CampaignRepository;
use markethub_database::repositories::finance::FinanceRepository;
use markethub_entity::finance::{CostEntry, CreateCostEntry, CreateRevenueEntry, RevenueEntry};

use crate::context::RequestContext;

/// Manages campaign cost and revenue records.
#[derive(Debug, Clone)]
pub struct FinanceService {
    /// Finance repository.
    finance_repo: Arc<FinanceRepository>,
    /// Campaign repository, for scoping checks.
    campaign_repo: Arc<CampaignRepository>,
}

impl FinanceService {
    /// Creates a new finance service.
    pub fn new(
        finance_repo: Arc<FinanceRepository>,
        campaign_repo: Arc<CampaignRepository>,
    ) -> Self {
        Self {
            finance_repo,
            campaign_repo,
        }
    }

    /// Lists cost entries for a campaign.
    pub async fn list_costs(&self, campaign_id: Uuid) -> AppResult<Vec<CostEntry>> {
        self.ensure_campaign(campaign_id).await?;
        self.finance_repo.find_costs(campaign_id).await
    }

    /// Lists revenue entries for a campaign.
    pub async fn list_revenues(&self, campaign_id: Uuid) -> AppResult<Vec<RevenueEntry>> {
        self.ensure_campaign(campaign_id).await?;
        self.finance_repo.find_revenues(campaign_id).await
    }

    /// Records a cost entry.
    pub async fn add_cost(
        &self,
        ctx: &RequestContext,
        mut data: CreateCostEntry,
    ) -> AppResult<CostEntry> {
        if data.amount <= 0.0 {
            return Err(AppError::validation("Cost amount must be positive"));
        }
        self.ensure_campaign(data.campaign_id).await?;
        data.created_by = ctx.user_id;

        let entry = self.finance_repo.create_cost(&data).await?;
        info!(cost_id = %entry.id, campaign_id = %entry.campaign_id,
              amount = entry.amount, "Cost recorded");
        Ok(entry)
    }

    /// Records a revenue entry.
    pub async fn add_revenue(
        &self,
        ctx: &RequestContext,
        mut data: CreateRevenueEntry,
    ) -> AppResult<RevenueEntry> {
        if data.amount <= 0.0 {
            return Err(AppError::validation("Revenue amount must be positive"));
        }
        self.ensure_campaign(data.campaign_id).await?;
        data.created_by = ctx.user_id;

        let entry = self.finance_repo.create_revenue(&data).await?;
        info!(revenue_id = %entry.id, campaign_id = %entry.campaign_id,
              amount = entry.amount, "Revenue recorded");
        Ok(entry)
    }

    /// Deletes a cost entry.
    pub async fn delete_cost(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if self.finance_repo.delete_cost(id).await? {
            info!(cost_id = %id, user_id = %ctx.user_id, "Cost entry deleted");
            Ok(())
        } else {
            Err(AppError::not_found("Cost entry not found"))
        }
    }

    /// Deletes a revenue entry.
    pub async fn delete_revenue(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if self.finance_repo.delete_revenue(id).await? {
            info!(revenue_id = %id, user_id = %ctx.user_id, "Revenue entry deleted");
            Ok(())
        } else {
            Err(AppError::not_found("Revenue entry not found"))
        }
    }

    async fn ensure_campaign(&self, campaign_id: Uuid) -> AppResult<()> {
        self.campaign_repo
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| AppError::not_found("Campaign not found"))?;
        Ok(())
    }
}
