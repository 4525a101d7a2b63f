//! Insight CRUD, share links, and fan-out orchestration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_core::types::pagination::{PageRequest, PageResponse};
use markethub_database::repositories::insight::InsightRepository;
use markethub_database::repositories::notification::NotificationRepository;
use markethub_entity::insight::{CreateInsight, InsightShare, MarketingInsight, ShareBranding};

use crate::context::RequestContext;

use super::fanout::InsightFanout;
use super::share::ShareLinkService;

/// The public view served for a valid share token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedInsightView {
    /// The shared insight.
    pub insight: MarketingInsight,
    /// Branding chosen by the sharing user.
    pub branding: serde_json::Value,
}

/// Manages marketing insights and their share links.
#[derive(Clone)]
pub struct InsightService {
    /// Insight repository.
    insight_repo: Arc<InsightRepository>,
    /// Notification repository, for enabled-preference lookup at fan-out.
    notif_repo: Arc<NotificationRepository>,
    /// Fan-out orchestrator.
    fanout: Arc<InsightFanout>,
    /// Share token generator.
    links: ShareLinkService,
}

impl InsightService {
    /// Creates a new insight service.
    pub fn new(
        insight_repo: Arc<InsightRepository>,
        notif_repo: Arc<NotificationRepository>,
        fanout: Arc<InsightFanout>,
    ) -> Self {
        Self {
            insight_repo,
            notif_repo,
            fanout,
            links: ShareLinkService::new(),
        }
    }

    /// Lists insights, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<MarketingInsight>> {
        self.insight_repo.find_all(page).await
    }

    /// Gets one insight by id.
    pub async fn get(&self, id: Uuid) -> AppResult<MarketingInsight> {
        self.insight_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Insight not found"))
    }

    /// Creates an insight and kicks off the notification fan-out.
    ///
    /// The fan-out runs on a spawned task after the row is durably
    /// inserted, so creation never blocks or fails on side effects.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateInsight,
    ) -> AppResult<MarketingInsight> {
        if data.summary.trim().is_empty() {
            return Err(AppError::validation("Insight summary cannot be empty"));
        }
        data.created_by = ctx.user_id;

        let insight = self.insight_repo.create(&data).await?;
        info!(insight_id = %insight.id, user_id = %ctx.user_id, "Insight created");

        let fanout = Arc::clone(&self.fanout);
        let notif_repo = Arc::clone(&self.notif_repo);
        let spawned = insight.clone();
        tokio::spawn(async move {
            match notif_repo.find_all_enabled_preferences().await {
                Ok(prefs) => {
                    fanout.run(&spawned, &prefs).await;
                }
                Err(e) => {
                    warn!(insight_id = %spawned.id, error = %e,
                          "Failed to load preferences for fan-out");
                }
            }
        });

        Ok(insight)
    }

    /// Deletes an insight.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let insight = self.get(id).await?;
        if insight.created_by != ctx.user_id && !ctx.is_manager_or_above() {
            return Err(AppError::forbidden("Cannot delete another user's insight"));
        }

        if self.insight_repo.delete(id).await? {
            info!(insight_id = %id, user_id = %ctx.user_id, "Insight deleted");
            Ok(())
        } else {
            Err(AppError::not_found("Insight not found"))
        }
    }

    // ── Share links ──────────────────────────────────────────────

    /// Creates a share link for an insight with custom branding.
    pub async fn create_share(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
        branding: ShareBranding,
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> AppResult<InsightShare> {
        // Share target must exist.
        self.get(insight_id).await?;

        let token = self.links.generate_token();
        let branding = serde_json::to_value(&branding)?;

        let share = self
            .insight_repo
            .create_share(insight_id, &token, &branding, ctx.user_id, expires_at)
            .await?;

        info!(share_id = %share.id, insight_id = %insight_id, "Share link created");
        Ok(share)
    }

    /// Lists the current user's share links.
    pub async fn list_shares(&self, ctx: &RequestContext) -> AppResult<Vec<InsightShare>> {
        self.insight_repo.find_shares_by_user(ctx.user_id).await
    }

    /// Revokes a share link owned by the current user.
    pub async fn delete_share(&self, ctx: &RequestContext, share_id: Uuid) -> AppResult<()> {
        let shares = self.insight_repo.find_shares_by_user(ctx.user_id).await?;
        if !shares.iter().any(|s| s.id == share_id) && !ctx.is_admin() {
            return Err(AppError::not_found("Share link not found"));
        }

        if self.insight_repo.delete_share(share_id).await? {
            info!(share_id = %share_id, "Share link revoked");
            Ok(())
        } else {
            Err(AppError::not_found("Share link not found"))
        }
    }

    /// Resolves a public share token to the branded insight view.
    ///
    /// Expired or unknown tokens both surface as not-found so the public
    /// endpoint leaks nothing about revoked links.
    pub async fn resolve_shared(&self, token: &str) -> AppResult<SharedInsightView> {
        let share = self
            .insight_repo
            .find_share_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Share link not found"))?;

        if share.is_expired() {
            return Err(AppError::not_found("Share link not found"));
        }

        let insight = self
            .insight_repo
            .find_by_id(share.insight_id)
            .await?
            .ok_or_else(|| AppError::not_found("Share link not found"))?;

        Ok(SharedInsightView {
            insight,
            branding: share.branding,
        })
    }
}
