//! Marketing asset handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use markethub_core::error::AppError;
use markethub_entity::asset::{Asset, CreateAsset};

use crate::dto::request::CreateAssetRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/campaigns/{id}/assets
pub async fn list_assets(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Asset>>>, AppError> {
    let assets = state.asset_service.list_for_campaign(campaign_id).await?;
    Ok(Json(ApiResponse::ok(assets)))
}

/// POST /api/campaigns/{id}/assets
pub async fn create_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
    Json(req): Json<CreateAssetRequest>,
) -> Result<Json<ApiResponse<Asset>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let asset = state
        .asset_service
        .create(
            &auth,
            CreateAsset {
                campaign_id,
                name: req.name,
                kind: req.kind,
                url: req.url,
                metadata: req.metadata,
                uploaded_by: auth.user_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(asset)))
}

/// DELETE /api/assets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.asset_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Asset deleted"))))
}
