//! Route definitions for the MarketHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Maximum accepted request body, in bytes.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(campaign_routes())
        .merge(task_routes())
        .merge(asset_routes())
        .merge(template_routes())
        .merge(finance_routes())
        .merge(feedback_routes())
        .merge(insight_routes())
        .merge(notification_routes())
        .merge(activity_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws", get(handlers::ws::ws_handler));

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Campaign CRUD, metrics, and team roster
fn campaign_routes() -> Router<AppState> {
    Router::new()
        .route("/campaigns", get(handlers::campaign::list_campaigns))
        .route("/campaigns", post(handlers::campaign::create_campaign))
        .route("/campaigns/{id}", get(handlers::campaign::get_campaign))
        .route("/campaigns/{id}", put(handlers::campaign::update_campaign))
        .route(
            "/campaigns/{id}",
            delete(handlers::campaign::delete_campaign),
        )
        .route(
            "/campaigns/{id}/metrics",
            get(handlers::campaign::campaign_metrics),
        )
        .route(
            "/campaigns/{id}/members",
            get(handlers::campaign::list_members),
        )
        .route(
            "/campaigns/{id}/members",
            post(handlers::campaign::add_member),
        )
        .route(
            "/campaigns/{id}/members/{member_id}",
            delete(handlers::campaign::remove_member),
        )
}

/// Tasks nested under campaigns, plus direct task access
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/campaigns/{id}/tasks", get(handlers::task::list_tasks))
        .route("/campaigns/{id}/tasks", post(handlers::task::create_task))
        .route("/tasks/{id}", get(handlers::task::get_task))
        .route("/tasks/{id}", put(handlers::task::update_task))
        .route("/tasks/{id}", delete(handlers::task::delete_task))
}

/// Marketing assets
fn asset_routes() -> Router<AppState> {
    Router::new()
        .route("/campaigns/{id}/assets", get(handlers::asset::list_assets))
        .route("/campaigns/{id}/assets", post(handlers::asset::create_asset))
        .route("/assets/{id}", delete(handlers::asset::delete_asset))
}

/// Email templates
fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/templates", get(handlers::template::list_templates))
        .route("/templates", post(handlers::template::create_template))
        .route("/templates/{id}", get(handlers::template::get_template))
        .route("/templates/{id}", put(handlers::template::update_template))
        .route(
            "/templates/{id}",
            delete(handlers::template::delete_template),
        )
}

/// Cost and revenue tracking
fn finance_routes() -> Router<AppState> {
    Router::new()
        .route("/campaigns/{id}/costs", get(handlers::finance::list_costs))
        .route("/campaigns/{id}/costs", post(handlers::finance::add_cost))
        .route(
            "/campaigns/{id}/revenues",
            get(handlers::finance::list_revenues),
        )
        .route(
            "/campaigns/{id}/revenues",
            post(handlers::finance::add_revenue),
        )
        .route("/costs/{id}", delete(handlers::finance::delete_cost))
        .route("/revenues/{id}", delete(handlers::finance::delete_revenue))
}

/// Client feedback; submission is public
fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/campaigns/{id}/feedback",
            get(handlers::feedback::list_feedback),
        )
        .route(
            "/campaigns/{id}/feedback",
            post(handlers::feedback::submit_feedback),
        )
}

/// Insights, share links, and the public branded view
fn insight_routes() -> Router<AppState> {
    Router::new()
        .route("/insights", get(handlers::insight::list_insights))
        .route("/insights", post(handlers::insight::create_insight))
        .route("/insights/shares", get(handlers::insight::list_shares))
        .route(
            "/insights/shares/{id}",
            delete(handlers::insight::delete_share),
        )
        .route("/insights/{id}", get(handlers::insight::get_insight))
        .route("/insights/{id}", delete(handlers::insight::delete_insight))
        .route("/insights/{id}/share", post(handlers::insight::create_share))
        .route("/shared/{token}", get(handlers::insight::view_shared))
}

/// Notification inbox and preferences
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::dismiss),
        )
        .route(
            "/notifications/preferences",
            get(handlers::notification::get_preferences),
        )
        .route(
            "/notifications/preferences",
            put(handlers::notification::update_preferences),
        )
}

/// Activity feeds
fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(handlers::activity::my_activities))
        .route(
            "/campaigns/{id}/activities",
            get(handlers::activity::campaign_activities),
        )
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
