//! Marketing insight handlers — CRUD, share links, and the public
//! branded share view.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use markethub_core::error::AppError;
use markethub_core::types::pagination::PageResponse;
use markethub_entity::insight::{InsightShare, MarketingInsight};
use markethub_service::SharedInsightView;

use crate::dto::request::{CreateInsightRequest, CreateShareRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/insights
pub async fn list_insights(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<MarketingInsight>>>, AppError> {
    let page = state
        .insight_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/insights
pub async fn create_insight(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateInsightRequest>,
) -> Result<Json<ApiResponse<MarketingInsight>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data = req.into_create(auth.user_id);
    let insight = state.insight_service.create(&auth, data).await?;
    Ok(Json(ApiResponse::ok(insight)))
}

/// GET /api/insights/{id}
pub async fn get_insight(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MarketingInsight>>, AppError> {
    let insight = state.insight_service.get(id).await?;
    Ok(Json(ApiResponse::ok(insight)))
}

/// DELETE /api/insights/{id}
pub async fn delete_insight(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.insight_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Insight deleted"))))
}

/// POST /api/insights/{id}/shares
pub async fn create_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateShareRequest>,
) -> Result<Json<ApiResponse<InsightShare>>, AppError> {
    let share = state
        .insight_service
        .create_share(&auth, id, req.branding, req.expires_at)
        .await?;
    Ok(Json(ApiResponse::ok(share)))
}

/// GET /api/insights/shares
pub async fn list_shares(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<InsightShare>>>, AppError> {
    let shares = state.insight_service.list_shares(&auth).await?;
    Ok(Json(ApiResponse::ok(shares)))
}

/// DELETE /api/insights/shares/{id}
pub async fn delete_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.insight_service.delete_share(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Share link deleted"))))
}

/// GET /api/shared/{token}
///
/// Public endpoint — no authentication. Expired and unknown tokens
/// produce the same 404.
pub async fn view_shared(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ApiResponse<SharedInsightView>>, AppError> {
    let view = state.insight_service.resolve_shared(&token).await?;
    Ok(Json(ApiResponse::ok(view)))
}
