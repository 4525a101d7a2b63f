//! Application assembly — wires config, database, services, realtime,
//! and the background worker into a running HTTP server.

use std::sync::Arc;

use tracing::info;

use markethub_auth::jwt::JwtDecoder;
use markethub_core::config::AppConfig;
use markethub_core::error::AppError;
use markethub_database::repositories::activity::ActivityRepository;
use markethub_database::repositories::asset::AssetRepository;
use markethub_database::repositories::campaign::CampaignRepository;
use markethub_database::repositories::feedback::FeedbackRepository;
use markethub_database::repositories::finance::FinanceRepository;
use markethub_database::repositories::insight::InsightRepository;
use markethub_database::repositories::member::TeamMemberRepository;
use markethub_database::repositories::notification::NotificationRepository;
use markethub_database::repositories::task::TaskRepository;
use markethub_database::repositories::template::EmailTemplateRepository;
use markethub_database::repositories::user::UserRepository;
use markethub_realtime::server::RealtimeEngine;
use markethub_service::insight::fanout::InsightFanout;
use markethub_service::{
    ActivityService, AssetService, CampaignService, FeedbackService, FinanceService,
    InsightService, MetricsService, NotificationService, RepositoryActivitySink, TaskService,
    TemplateService, UserService,
};
use markethub_worker::CronScheduler;
use markethub_worker::jobs::{CleanupJob, DigestJob};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the Axum application from pre-constructed state.
pub fn build_app(state: AppState) -> axum::Router {
    build_router(state)
}

/// Boots the full application: database, services, realtime engine,
/// the cron worker, and the HTTP server. Blocks until shutdown.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    // ── Step 1: Database pool & migrations ───────────────────────
    let db_pool = markethub_database::connection::create_pool(&config.database).await?;
    markethub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let campaign_repo = Arc::new(CampaignRepository::new(db_pool.clone()));
    let task_repo = Arc::new(TaskRepository::new(db_pool.clone()));
    let member_repo = Arc::new(TeamMemberRepository::new(db_pool.clone()));
    let asset_repo = Arc::new(AssetRepository::new(db_pool.clone()));
    let template_repo = Arc::new(EmailTemplateRepository::new(db_pool.clone()));
    let finance_repo = Arc::new(FinanceRepository::new(db_pool.clone()));
    let feedback_repo = Arc::new(FeedbackRepository::new(db_pool.clone()));
    let insight_repo = Arc::new(InsightRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
    let activity_repo = Arc::new(ActivityRepository::new(db_pool.clone()));

    // ── Step 3: Auth components ──────────────────────────────────
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Step 4: Realtime engine ──────────────────────────────────
    let realtime = Arc::new(RealtimeEngine::new(
        config.realtime.clone(),
        Arc::clone(&jwt_decoder),
        Arc::clone(&notification_repo),
    ));

    // ── Step 5: Insight fan-out ──────────────────────────────────
    // Matched users always get an activity record; the dispatcher
    // decides between socket push and stored notification.
    let activity_sink = Arc::new(RepositoryActivitySink::new(Arc::clone(&activity_repo)));
    let broadcast: Arc<dyn markethub_service::AlertBroadcast> = realtime.dispatcher.clone();
    let fanout = Arc::new(InsightFanout::new(activity_sink, broadcast));

    // ── Step 6: Services ─────────────────────────────────────────
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo), &config.auth));
    let campaign_service = Arc::new(CampaignService::new(
        Arc::clone(&campaign_repo),
        Arc::clone(&member_repo),
        Arc::clone(&activity_repo),
    ));
    let metrics_service = Arc::new(MetricsService::new(
        Arc::clone(&campaign_repo),
        Arc::clone(&finance_repo),
        Arc::clone(&task_repo),
        Arc::clone(&feedback_repo),
    ));
    let task_service = Arc::new(TaskService::new(
        Arc::clone(&task_repo),
        Arc::clone(&campaign_repo),
    ));
    let asset_service = Arc::new(AssetService::new(
        Arc::clone(&asset_repo),
        Arc::clone(&campaign_repo),
    ));
    let template_service = Arc::new(TemplateService::new(Arc::clone(&template_repo)));
    let finance_service = Arc::new(FinanceService::new(
        Arc::clone(&finance_repo),
        Arc::clone(&campaign_repo),
    ));
    let feedback_service = Arc::new(FeedbackService::new(
        Arc::clone(&feedback_repo),
        Arc::clone(&campaign_repo),
    ));
    let insight_service = Arc::new(InsightService::new(
        Arc::clone(&insight_repo),
        Arc::clone(&notification_repo),
        fanout,
    ));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));
    let activity_service = Arc::new(ActivityService::new(Arc::clone(&activity_repo)));

    // ── Step 7: Background worker ────────────────────────────────
    let _scheduler = if config.worker.enabled {
        let scheduler = CronScheduler::new(config.worker.clone()).await?;
        scheduler
            .register_jobs(
                DigestJob::new(Arc::clone(&notification_repo)),
                CleanupJob::new(
                    Arc::clone(&notification_repo),
                    Arc::clone(&activity_repo),
                    config.realtime.notifications.retention_days,
                    config.realtime.notifications.max_stored_per_user,
                    config.worker.activity_retention_days,
                ),
            )
            .await?;
        scheduler.start().await?;
        info!("Background worker started");
        Some(scheduler)
    } else {
        None
    };

    // ── Step 8: Build and start HTTP server ──────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        jwt_decoder,
        user_service,
        campaign_service,
        metrics_service,
        task_service,
        asset_service,
        template_service,
        finance_service,
        feedback_service,
        insight_service,
        notification_service,
        activity_service,
        realtime,
    };

    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("MarketHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
