//! Insight lifecycle: creation, preference matching, fan-out, and share links.

pub mod fanout;
pub mod matcher;
pub mod service;
pub mod share;

pub use fanout::{ActivitySink, AlertBroadcast, FanoutSummary, InsightAlert, InsightFanout, NoopBroadcast};
pub use matcher::{MatchDecision, MatchOutcome, evaluate, match_preferences};
pub use service::{InsightService, SharedInsightView};
pub use share::ShareLinkService;
