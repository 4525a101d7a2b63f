//! Authentication handlers — register, login, refresh, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use markethub_core::error::AppError;
use markethub_service::user::RegisterRequest as RegisterData;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(RegisterData {
            username: req.username,
            password: req.password,
            email: req.email,
            display_name: req.display_name,
            role: req.role,
        })
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from_user(&user))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.user_service.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse::from_parts(
        &outcome.user,
        outcome.tokens,
    ))))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let outcome = state.user_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(LoginResponse::from_parts(
        &outcome.user,
        outcome.tokens,
    ))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from_user(&user))))
}
