//! Task handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_entity::task::{CreateTask, Task, UpdateTask};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/campaigns/{id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Task>>>, AppError> {
    let tasks = state.task_service.list_for_campaign(campaign_id).await?;
    Ok(Json(ApiResponse::ok(tasks)))
}

/// POST /api/campaigns/{id}/tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(campaign_id): Path<Uuid>,
    Json(mut req): Json<CreateTask>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    req.campaign_id = campaign_id;
    let task = state.task_service.create(&auth, req).await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// GET /api/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    let task = state.task_service.get(id).await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTask>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    let task = state.task_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.task_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Task deleted"))))
}
