//! Activity feed handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::types::pagination::PageResponse;
use markethub_entity::activity::Activity;

use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/activities
pub async fn my_activities(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Activity>>>, AppError> {
    let page = state
        .activity_service
        .list_for_user(&auth, &params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/campaigns/{id}/activities
pub async fn campaign_activities(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Activity>>>, AppError> {
    let page = state
        .activity_service
        .list_for_campaign(campaign_id, &params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}
