//! Fan-out behavior tests with in-memory collaborators.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_entity::activity::NewActivity;
use markethub_entity::insight::MarketingInsight;
use markethub_entity::notification::{FrequencyLimit, NotificationPreference};
use markethub_service::insight::fanout::{
    ActivitySink, AlertBroadcast, InsightAlert, InsightFanout, NoopBroadcast,
};

/// Records every activity entry; optionally fails for one user.
#[derive(Default)]
struct RecordingSink {
    entries: Mutex<Vec<NewActivity>>,
    fail_for: Option<Uuid>,
}

#[async_trait]
impl ActivitySink for RecordingSink {
    async fn record(&self, entry: NewActivity) -> AppResult<()> {
        if self.fail_for == Some(entry.user_id) {
            return Err(AppError::database("activity insert failed"));
        }
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }
}

/// Records delivered alerts; optionally fails for one user.
#[derive(Default)]
struct RecordingBroadcast {
    alerts: Mutex<Vec<(Uuid, InsightAlert)>>,
    fail_for: Option<Uuid>,
}

#[async_trait]
impl AlertBroadcast for RecordingBroadcast {
    async fn deliver(&self, user_id: Uuid, alert: InsightAlert) -> AppResult<()> {
        if self.fail_for == Some(user_id) {
            return Err(AppError::service_unavailable("socket gone"));
        }
        self.alerts.lock().unwrap().push((user_id, alert));
        Ok(())
    }
}

fn insight() -> MarketingInsight {
    MarketingInsight {
        id: Uuid::new_v4(),
        category: Some("luxury".to_string()),
        property_type: Some("condo".to_string()),
        location: Some("Downtown Seattle".to_string()),
        summary: "Waterfront condo demand is rising".to_string(),
        keywords: vec!["waterfront".to_string()],
        campaign_id: None,
        created_by: Uuid::new_v4(),
        created_at: Utc::now(),
    }
}

fn pref(user_id: Uuid) -> NotificationPreference {
    NotificationPreference::default_for_user(user_id)
}

#[tokio::test]
async fn matched_user_gets_activity_and_alert() {
    let sink = Arc::new(RecordingSink::default());
    let broadcast = Arc::new(RecordingBroadcast::default());
    let fanout = InsightFanout::new(sink.clone(), broadcast.clone());

    let user = Uuid::new_v4();
    let i = insight();
    let summary = fanout.run(&i, &[pref(user)]).await;

    assert_eq!(summary.matched_users, 1);
    assert_eq!(summary.activities_recorded, 1);
    assert_eq!(summary.alerts_delivered, 1);

    let entries = sink.entries.lock().unwrap();
    assert_eq!(entries[0].user_id, user);
    assert_eq!(entries[0].action_type, "insight_matched");
    // Campaign-less insight: activity carries no campaign context.
    assert_eq!(entries[0].campaign_id, None);

    let alerts = broadcast.alerts.lock().unwrap();
    let (to, alert) = &alerts[0];
    assert_eq!(*to, user);
    assert_eq!(alert.link, format!("/insights/{}", i.id));
    assert!(!alert.read);
}

#[tokio::test]
async fn alert_id_is_deterministic_per_insight_and_user() {
    let i = insight();
    let user = Uuid::new_v4();

    let a = InsightAlert::for_match(&i, user, 3);
    let b = InsightAlert::for_match(&i, user, 3);
    assert_eq!(a.id, b.id);

    let other = InsightAlert::for_match(&i, Uuid::new_v4(), 3);
    assert_ne!(a.id, other.id);
}

#[tokio::test]
async fn one_user_failure_never_blocks_the_next() {
    let failing_user = Uuid::new_v4();
    let healthy_user = Uuid::new_v4();

    let sink = Arc::new(RecordingSink {
        fail_for: Some(failing_user),
        ..Default::default()
    });
    let broadcast = Arc::new(RecordingBroadcast {
        fail_for: Some(failing_user),
        ..Default::default()
    });
    let fanout = InsightFanout::new(sink.clone(), broadcast.clone());

    let summary = fanout
        .run(&insight(), &[pref(failing_user), pref(healthy_user)])
        .await;

    assert_eq!(summary.matched_users, 2);
    assert_eq!(summary.activities_recorded, 1);
    assert_eq!(summary.alerts_delivered, 1);
    assert_eq!(broadcast.alerts.lock().unwrap()[0].0, healthy_user);
}

#[tokio::test]
async fn app_notifications_off_skips_alert_but_records_activity() {
    let sink = Arc::new(RecordingSink::default());
    let broadcast = Arc::new(RecordingBroadcast::default());
    let fanout = InsightFanout::new(sink.clone(), broadcast.clone());

    let mut p = pref(Uuid::new_v4());
    p.app_notifications = false;

    let summary = fanout.run(&insight(), &[p]).await;
    assert_eq!(summary.activities_recorded, 1);
    assert_eq!(summary.alerts_delivered, 0);
    assert!(broadcast.alerts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn email_eligibility_requires_immediate_frequency() {
    let sink = Arc::new(RecordingSink::default());
    let fanout = InsightFanout::new(sink, Arc::new(NoopBroadcast));

    let immediate = Uuid::new_v4();
    let daily = Uuid::new_v4();

    let mut p1 = pref(immediate);
    p1.email_notifications = true;

    let mut p2 = pref(daily);
    p2.email_notifications = true;
    p2.frequency_limit = FrequencyLimit::Daily;

    let summary = fanout.run(&insight(), &[p1, p2]).await;
    assert_eq!(summary.email_eligible, vec![immediate]);
}

#[tokio::test]
async fn campaign_insight_carries_campaign_into_activity() {
    let sink = Arc::new(RecordingSink::default());
    let fanout = InsightFanout::new(sink.clone(), Arc::new(NoopBroadcast));

    let campaign_id = Uuid::new_v4();
    let mut i = insight();
    i.campaign_id = Some(campaign_id);

    fanout.run(&i, &[pref(Uuid::new_v4())]).await;
    assert_eq!(
        sink.entries.lock().unwrap()[0].campaign_id,
        Some(campaign_id)
    );
}

#[tokio::test]
async fn relevance_score_flows_into_alert() {
    let sink = Arc::new(RecordingSink::default());
    let broadcast = Arc::new(RecordingBroadcast::default());
    let fanout = InsightFanout::new(sink, broadcast.clone());

    let mut p = pref(Uuid::new_v4());
    p.categories = vec!["luxury".to_string()];
    p.keyword_matches = vec!["waterfront".to_string()];

    fanout.run(&insight(), &[p]).await;

    let alerts = broadcast.alerts.lock().unwrap();
    // category +2, keyword overlap +3, summary hit +1
    assert_eq!(alerts[0].1.relevance_score, 6);
}
