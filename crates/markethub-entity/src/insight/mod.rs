//! Marketing insight domain entities.

pub mod model;
pub mod share;

pub use model::{CreateInsight, MarketingInsight};
pub use share::{CreateInsightShare, InsightShare, ShareBranding};
