//! Email template handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use markethub_core::error::AppError;
use markethub_entity::template::{CreateEmailTemplate, EmailTemplate, UpdateEmailTemplate};

use crate::dto::request::CreateTemplateRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/templates
pub async fn list_templates(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<EmailTemplate>>>, AppError> {
    let templates = state.template_service.list().await?;
    Ok(Json(ApiResponse::ok(templates)))
}

/// POST /api/templates
pub async fn create_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTemplateRequest>,
) -> Result<Json<ApiResponse<EmailTemplate>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let template = state
        .template_service
        .create(
            &auth,
            CreateEmailTemplate {
                name: req.name,
                subject: req.subject,
                body_html: req.body_html,
                category: req.category,
                created_by: auth.user_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(template)))
}

/// GET /api/templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EmailTemplate>>, AppError> {
    let template = state.template_service.get(id).await?;
    Ok(Json(ApiResponse::ok(template)))
}

/// PUT /api/templates/{id}
pub async fn update_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEmailTemplate>,
) -> Result<Json<ApiResponse<EmailTemplate>>, AppError> {
    let template = state.template_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(template)))
}

/// DELETE /api/templates/{id}
pub async fn delete_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.template_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Template deleted"))))
}
