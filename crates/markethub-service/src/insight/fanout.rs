//! Notification fan-out for freshly created insights.
//!
//! The fan-out walks every enabled preference, scores it with the matcher,
//! and for each matched user records an activity entry and (when the user
//! opted into app notifications) delivers a realtime alert. Side-effect
//! failures are logged and never stop the remaining users from being
//! processed.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use markethub_core::result::AppResult;
use markethub_entity::activity::NewActivity;
use markethub_entity::insight::MarketingInsight;
use markethub_entity::notification::{FrequencyLimit, NotificationPreference};

use super::matcher;

/// Persistence collaborator for activity records.
#[async_trait]
pub trait ActivitySink: Send + Sync {
    /// Record one activity entry.
    async fn record(&self, entry: NewActivity) -> AppResult<()>;
}

/// Realtime delivery collaborator for insight alerts.
#[async_trait]
pub trait AlertBroadcast: Send + Sync {
    /// Deliver an alert to one user.
    async fn deliver(&self, user_id: Uuid, alert: InsightAlert) -> AppResult<()>;
}

/// Broadcast implementation that drops every alert.
///
/// Used when no realtime transport is attached (tests, offline tooling).
#[derive(Debug, Clone, Default)]
pub struct NoopBroadcast;

#[async_trait]
impl AlertBroadcast for NoopBroadcast {
    async fn deliver(&self, _user_id: Uuid, _alert: InsightAlert) -> AppResult<()> {
        Ok(())
    }
}

/// The push payload delivered to a matched user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightAlert {
    /// Deterministic alert id, derived from the insight and user ids so a
    /// re-run of the same fan-out produces the same notification.
    pub id: Uuid,
    /// Alert title.
    pub title: String,
    /// Alert body text.
    pub message: String,
    /// Insight category, when present.
    pub category: Option<String>,
    /// When the alert was produced.
    pub timestamp: DateTime<Utc>,
    /// Always false at delivery time.
    pub read: bool,
    /// Deep link into the insight detail view.
    pub link: String,
    /// The relevance score that matched this user.
    pub relevance_score: i32,
}

impl InsightAlert {
    /// Build the alert for one matched user.
    pub fn for_match(insight: &MarketingInsight, user_id: Uuid, score: i32) -> Self {
        let id = Uuid::new_v5(
            &Uuid::NAMESPACE_OID,
            format!("{}:{}", insight.id, user_id).as_bytes(),
        );
        Self {
            id,
            title: "New marketing insight matches your interests".to_string(),
            message: insight.summary.clone(),
            category: insight.category.clone(),
            timestamp: Utc::now(),
            read: false,
            link: format!("/insights/{}", insight.id),
            relevance_score: score,
        }
    }
}

/// Result of one fan-out run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FanoutSummary {
    /// Users whose preference matched.
    pub matched_users: usize,
    /// Activity entries successfully recorded.
    pub activities_recorded: usize,
    /// Alerts successfully handed to the broadcast.
    pub alerts_delivered: usize,
    /// Users eligible for an immediate email from the external mailer.
    pub email_eligible: Vec<Uuid>,
}

/// Orchestrates matching and per-user side effects for a new insight.
#[derive(Clone)]
pub struct InsightFanout {
    /// Activity persistence collaborator.
    activity_sink: Arc<dyn ActivitySink>,
    /// Realtime delivery collaborator.
    broadcast: Arc<dyn AlertBroadcast>,
}

impl InsightFanout {
    /// Creates a fan-out with the given collaborators.
    pub fn new(activity_sink: Arc<dyn ActivitySink>, broadcast: Arc<dyn AlertBroadcast>) -> Self {
        Self {
            activity_sink,
            broadcast,
        }
    }

    /// Run the fan-out for one insight against a preference set.
    ///
    /// One user's failure never blocks the next; failed side effects are
    /// logged and counted out of the summary.
    pub async fn run(
        &self,
        insight: &MarketingInsight,
        prefs: &[NotificationPreference],
    ) -> FanoutSummary {
        let mut summary = FanoutSummary::default();

        for pref in prefs {
            let decision = matcher::evaluate(insight, pref);
            if !decision.matched {
                continue;
            }
            summary.matched_users += 1;

            // Activity always, regardless of notification flags. Campaign
            // context falls back to NULL for campaign-less insights.
            let entry = NewActivity {
                user_id: pref.user_id,
                campaign_id: insight.campaign_id,
                action_type: "insight_matched".to_string(),
                content: format!(
                    "Marketing insight matched your preferences (relevance {}): {}",
                    decision.score, insight.summary
                ),
            };
            match self.activity_sink.record(entry).await {
                Ok(()) => summary.activities_recorded += 1,
                Err(e) => {
                    warn!(user_id = %pref.user_id, insight_id = %insight.id,
                          error = %e, "Failed to record insight activity");
                }
            }

            if pref.app_notifications {
                let alert = InsightAlert::for_match(insight, pref.user_id, decision.score);
                match self.broadcast.deliver(pref.user_id, alert).await {
                    Ok(()) => summary.alerts_delivered += 1,
                    Err(e) => {
                        warn!(user_id = %pref.user_id, insight_id = %insight.id,
                              error = %e, "Failed to deliver insight alert");
                    }
                }
            }

            // Email is eligibility-only; the external mailer consumes this.
            if pref.email_notifications && pref.frequency_limit == FrequencyLimit::Immediate {
                summary.email_eligible.push(pref.user_id);
            }
        }

        debug!(
            insight_id = %insight.id,
            matched = summary.matched_users,
            alerts = summary.alerts_delivered,
            "Insight fan-out complete"
        );

        summary
    }
}
