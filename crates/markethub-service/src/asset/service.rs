//! Asset registry operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_database::repositories::asset::AssetRepository;
use markethub_database::repositories::campaign::CampaignRepository;
use markethub_entity::asset::{Asset, CreateAsset};

use crate::context::RequestContext;

/// Accepted asset kinds.
const ASSET_KINDS: &[&str] = &["image", "video", "document", "copy"];

/// Manages campaign asset records.
#[derive(Debug, Clone)]
pub struct AssetService {
    /// Asset repository.
    asset_repo: Arc<AssetRepository>,
    /// Campaign repository, for scoping checks.
    campaign_repo: Arc<CampaignRepository>,
}

impl AssetService {
    /// Creates a new asset service.
    pub fn new(asset_repo: Arc<AssetRepository>, campaign_repo: Arc<CampaignRepository>) -> Self {
        Self {
            asset_repo,
            campaign_repo,
        }
    }

    /// Lists assets attached to a campaign.
    pub async fn list_for_campaign(&self, campaign_id: Uuid) -> AppResult<Vec<Asset>> {
        self.ensure_campaign(campaign_id).await?;
        self.asset_repo.find_by_campaign(campaign_id).await
    }

    /// Registers a new asset record.
    pub async fn create(&self, ctx: &RequestContext, mut data: CreateAsset) -> AppResult<Asset> {
        if !ASSET_KINDS.contains(&data.kind.as_str()) {
            return Err(AppError::validation(format!(
                "Unknown asset kind \"{}\"",
                data.kind
            )));
        }
        if data.url.trim().is_empty() {
            return Err(AppError::validation("Asset URL cannot be empty"));
        }
        self.ensure_campaign(data.campaign_id).await?;
        data.uploaded_by = ctx.user_id;

        let asset = self.asset_repo.create(&data).await?;
        info!(asset_id = %asset.id, campaign_id = %asset.campaign_id, "Asset registered");
        Ok(asset)
    }

    /// Deletes an asset record.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if self.asset_repo.delete(id).await? {
            info!(asset_id = %id, user_id = %ctx.user_id, "Asset deleted");
            Ok(())
        } else {
            Err(AppError::not_found("Asset not found"))
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
