//! # markethub-service
//!
//! Business logic service layer for MarketHub. Each service orchestrates
//! repositories and authentication to implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod activity;
pub mod asset;
pub mod campaign;
pub mod context;
pub mod feedback;
pub mod finance;
pub mod insight;
pub mod notification;
pub mod task;
pub mod template;
pub mod user;

pub use activity::{ActivityService, RepositoryActivitySink};
pub use asset::AssetService;
pub use campaign::{CampaignService, MetricsService};
pub use context::RequestContext;
pub use feedback::FeedbackService;
pub use finance::FinanceService;
pub use insight::{
    ActivitySink, AlertBroadcast, InsightAlert, InsightFanout, InsightService, NoopBroadcast,
    SharedInsightView,
};
pub use notification::NotificationService;
pub use task::TaskService;
pub use template::TemplateService;
pub use user::UserService;
