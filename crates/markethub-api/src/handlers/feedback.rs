//! Client feedback handlers.
//!
//! Submission is unauthenticated — clients fill in feedback forms from
//! campaign landing pages without an account.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_entity::feedback::{ClientFeedback, SubmitFeedback};

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/campaigns/{id}/feedback
pub async fn list_feedback(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ClientFeedback>>>, AppError> {
    let feedback = state.feedback_service.list_for_campaign(campaign_id).await?;
    Ok(Json(ApiResponse::ok(feedback)))
}

/// POST /api/campaigns/{id}/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
    Json(mut req): Json<SubmitFeedback>,
) -> Result<Json<ApiResponse<ClientFeedback>>, AppError> {
    req.campaign_id = campaign_id;
    let feedback = state.feedback_service.submit(req).await?;
    Ok(Json(ApiResponse::ok(feedback)))
}
