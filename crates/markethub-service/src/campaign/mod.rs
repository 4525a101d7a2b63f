//! Campaign management and performance metrics.

pub mod metrics;
pub mod service;

pub use metrics::MetricsService;
pub use service::CampaignService;
