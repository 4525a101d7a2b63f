//! Campaign handlers — CRUD, metrics, and team roster.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use markethub_core::error::AppError;
use markethub_core::types::pagination::PageResponse;
use markethub_entity::campaign::{Campaign, CampaignMetrics, CreateCampaign, UpdateCampaign};
use markethub_entity::member::{AddTeamMember, TeamMember};

use crate::dto::request::CreateCampaignRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/campaigns
pub async fn list_campaigns(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Campaign>>>, AppError> {
    let page = state
        .campaign_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/campaigns
pub async fn create_campaign(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<Json<ApiResponse<Campaign>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let campaign = state
        .campaign_service
        .create(
            &auth,
            CreateCampaign {
                name: req.name,
                description: req.description,
                property_type: req.property_type,
                location: req.location,
                budget: req.budget,
                start_date: req.start_date,
                end_date: req.end_date,
                created_by: auth.user_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(campaign)))
}

/// GET /api/campaigns/{id}
pub async fn get_campaign(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Campaign>>, AppError> {
    let campaign = state.campaign_service.get(id).await?;
    Ok(Json(ApiResponse::ok(campaign)))
}

/// PUT /api/campaigns/{id}
pub async fn update_campaign(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCampaign>,
) -> Result<Json<ApiResponse<Campaign>>, AppError> {
    let campaign = state.campaign_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(campaign)))
}

/// DELETE /api/campaigns/{id}
pub async fn delete_campaign(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.campaign_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Campaign deleted"))))
}

/// GET /api/campaigns/{id}/metrics
pub async fn campaign_metrics(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CampaignMetrics>>, AppError> {
    let metrics = state.metrics_service.for_campaign(id).await?;
    Ok(Json(ApiResponse::ok(metrics)))
}

/// GET /api/campaigns/{id}/members
pub async fn list_members(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<TeamMember>>>, AppError> {
    let members = state.campaign_service.list_members(id).await?;
    Ok(Json(ApiResponse::ok(members)))
}

/// POST /api/campaigns/{id}/members
pub async fn add_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(mut req): Json<AddTeamMember>,
) -> Result<Json<ApiResponse<TeamMember>>, AppError> {
    // The path is authoritative for the campaign.
    req.campaign_id = id;
    let member = state.campaign_service.add_member(&auth, req).await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// DELETE /api/campaigns/{id}/members/{member_id}
pub async fn remove_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.campaign_service.remove_member(&auth, member_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Member removed"))))
}
