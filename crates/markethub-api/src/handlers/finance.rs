//! Cost and revenue handlers.

use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use markethub_core::error::AppError;
use markethub_entity::finance::{CostEntry, CreateCostEntry, CreateRevenueEntry, RevenueEntry};

use crate::dto::request::{CreateCostRequest, CreateRevenueRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/campaigns/{id}/costs
pub async fn list_costs(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CostEntry>>>, AppError> {
    let costs = state.finance_service.list_costs(campaign_id).await?;
    Ok(Json(ApiResponse::ok(costs)))
}

/// POST /api/campaigns/{id}/costs
pub async fn add_cost(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
    Json(req): Json<CreateCostRequest>,
) -> Result<Json<ApiResponse<CostEntry>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let entry = state
        .finance_service
        .add_cost(
            &auth,
            CreateCostEntry {
                campaign_id,
                description: req.description,
                category: req.category,
                amount: req.amount,
                incurred_at: req.incurred_at.unwrap_or_else(Utc::now),
                created_by: auth.user_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(entry)))
}

/// GET /api/campaigns/{id}/revenues
pub async fn list_revenues(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<RevenueEntry>>>, AppError> {
    let revenues = state.finance_service.list_revenues(campaign_id).await?;
    Ok(Json(ApiResponse::ok(revenues)))
}

/// POST /api/campaigns/{id}/revenues
pub async fn add_revenue(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
    Json(req): Json<CreateRevenueRequest>,
) -> Result<Json<ApiResponse<RevenueEntry>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let entry = state
        .finance_service
        .add_revenue(
            &auth,
            CreateRevenueEntry {
                campaign_id,
                description: req.description,
                amount: req.amount,
                realized_at: req.realized_at.unwrap_or_else(Utc::now),
                created_by: auth.user_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(entry)))
}

/// DELETE /api/costs/{id}
pub async fn delete_cost(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.finance_service.delete_cost(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Cost entry deleted"))))
}

/// DELETE /api/revenues/{id}
pub async fn delete_revenue(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.finance_service.delete_revenue(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Revenue entry deleted",
    ))))
}
