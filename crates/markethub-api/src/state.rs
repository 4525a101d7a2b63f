//! Shared application state threaded through every handler.

use std::sync::Arc;

use sqlx::PgPool;

use markethub_auth::jwt::JwtDecoder;
use markethub_core::config::AppConfig;
use markethub_realtime::server::RealtimeEngine;
use markethub_service::{
    ActivityService, AssetService, CampaignService, FeedbackService, FinanceService,
    InsightService, MetricsService, NotificationService, TaskService, TemplateService, UserService,
};

/// Application state shared across all request handlers.
///
/// Everything here is cheaply cloneable — `Arc` references plus the
/// sqlx pool, which is itself an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Database connection pool.
    pub db_pool: PgPool,
    /// JWT decoder for request authentication.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User accounts and sessions.
    pub user_service: Arc<UserService>,
    /// Campaign CRUD and team rosters.
    pub campaign_service: Arc<CampaignService>,
    /// Campaign performance metrics.
    pub metrics_service: Arc<MetricsService>,
    /// Tasks within campaigns.
    pub task_service: Arc<TaskService>,
    /// Marketing assets.
    pub asset_service: Arc<AssetService>,
    /// Email templates.
    pub template_service: Arc<TemplateService>,
    /// Cost and revenue entries.
    pub finance_service: Arc<FinanceService>,
    /// Client feedback.
    pub feedback_service: Arc<FeedbackService>,
    /// Marketing insights, share links, and fan-out.
    pub insight_service: Arc<InsightService>,
    /// Notification inbox and preferences.
    pub notification_service: Arc<NotificationService>,
    /// Activity feeds.
    pub activity_service: Arc<ActivityService>,
    /// Real-time WebSocket engine.
    pub realtime: Arc<RealtimeEngine>,
}
