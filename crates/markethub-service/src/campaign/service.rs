//! Campaign CRUD and team roster management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_core::types::pagination::{PageRequest, PageResponse};
use markethub_database::repositories::activity::ActivityRepository;
use markethub_database::repositories::campaign::CampaignRepository;
use markethub_database::repositories::member::TeamMemberRepository;
use markethub_entity::activity::NewActivity;
use markethub_entity::campaign::{Campaign, CreateCampaign, UpdateCampaign};
use markethub_entity::member::{AddTeamMember, TeamMember};

use crate::context::RequestContext;

/// Manages campaigns and their team rosters.
#[derive(Debug, Clone)]
pub struct CampaignService {
    /// Campaign repository.
    campaign_repo: Arc<CampaignRepository>,
    /// Team member repository.
    member_repo: Arc<TeamMemberRepository>,
    /// Activity repository for the campaign audit trail.
    activity_repo: Arc<ActivityRepository>,
}

impl CampaignService {
    /// Creates a new campaign service.
    pub fn new(
        campaign_repo: Arc<CampaignRepository>,
        member_repo: Arc<TeamMemberRepository>,
        activity_repo: Arc<ActivityRepository>,
    ) -> Self {
        Self {
            campaign_repo,
            member_repo,
            activity_repo,
        }
    }

    /// Lists campaigns, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Campaign>> {
        self.campaign_repo.find_all(page).await
    }

    /// Gets one campaign by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Campaign> {
        self.campaign_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Campaign not found"))
    }

    /// Creates a new campaign.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateCampaign,
    ) -> AppResult<Campaign> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Campaign name cannot be empty"));
        }
        if data.budget.is_some_and(|b| b < 0.0) {
            return Err(AppError::validation("Budget cannot be negative"));
        }
        data.created_by = ctx.user_id;

        let campaign = self.campaign_repo.create(&data).await?;
        info!(campaign_id = %campaign.id, user_id = %ctx.user_id, "Campaign created");

        self.record_activity(ctx, campaign.id, "campaign_created", &campaign.name)
            .await;

        Ok(campaign)
    }

    /// Applies a partial update to a campaign.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateCampaign,
    ) -> AppResult<Campaign> {
        if let Some(budget) = data.budget {
            if budget < 0.0 {
                return Err(AppError::validation("Budget cannot be negative"));
            }
        }

        let campaign = self
            .campaign_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Campaign not found"))?;

        self.record_activity(ctx, campaign.id, "campaign_updated", &campaign.name)
            .await;

        Ok(campaign)
    }

    /// Deletes a campaign. Requires manager privileges.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if !ctx.is_manager_or_above() {
            return Err(AppError::forbidden("Only managers can delete campaigns"));
        }

        let campaign = self.get(id).await?;
        if self.campaign_repo.delete(id).await? {
            info!(campaign_id = %id, user_id = %ctx.user_id, "Campaign deleted");
            self.record_activity(ctx, id, "campaign_deleted", &campaign.name)
                .await;
            Ok(())
        } else {
            Err(AppError::not_found("Campaign not found"))
        }
    }

    // ── Team roster ──────────────────────────────────────────────

    /// Lists team members for a campaign.
    pub async fn list_members(&self, campaign_id: Uuid) -> AppResult<Vec<TeamMember>> {
        self.get(campaign_id).await?;
        self.member_repo.find_by_campaign(campaign_id).await
    }

    /// Adds a user to a campaign team.
    pub async fn add_member(
        &self,
        ctx: &RequestContext,
        data: AddTeamMember,
    ) -> AppResult<TeamMember> {
        self.get(data.campaign_id).await?;
        let member = self.member_repo.add(&data).await?;
        info!(campaign_id = %data.campaign_id, member_user = %data.user_id,
              added_by = %ctx.user_id, "Team member added");
        Ok(member)
    }

    /// Removes a team member by roster entry id.
    pub async fn remove_member(&self, ctx: &RequestContext, member_id: Uuid) -> AppResult<()> {
        if self.member_repo.remove(member_id).await? {
            info!(member_id = %member_id, user_id = %ctx.user_id, "Team member removed");
            Ok(())
        } else {
            Err(AppError::not_found("Team member not found"))
        }
    }

    /// Best-effort activity record; failures are logged by the repository.
    async fn record_activity(
        &self,
        ctx: &RequestContext,
        campaign_id: Uuid,
        action_type: &str,
        name: &str,
    ) {
        let entry = NewActivity {
            user_id: ctx.user_id,
            campaign_id: Some(campaign_id),
            action_type: action_type.to_string(),
            content: format!("Campaign \"{name}\""),
        };
        if let Err(e) = self.activity_repo.create(&entry).await {
            tracing::warn!(campaign_id = %campaign_id, error = %e,
                           "Failed to record campaign activity");
        }
    }
}
