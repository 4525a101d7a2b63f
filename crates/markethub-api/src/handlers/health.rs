//! Health check handlers.

use axum::Json;
use axum::extract::State;

use markethub_core::error::AppError;
use markethub_database::connection::health_check;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DetailedHealthResponse>>, AppError> {
    let db_ok = health_check(&state.db_pool).await.unwrap_or(false);
    let ws_connections = state.realtime.connections.connection_count();

    Ok(Json(ApiResponse::ok(DetailedHealthResponse {
        status: if db_ok { "ok" } else { "degraded" }.to_string(),
        database: if db_ok { "connected" } else { "unreachable" }.to_string(),
        ws_connections,
    })))
}
