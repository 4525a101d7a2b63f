//! Activity log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An append-only activity record tied to a user and optionally a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: Uuid,
    /// The user the activity concerns.
    pub user_id: Uuid,
    /// The related campaign; NULL when the action has no campaign context
    /// (e.g. a matched insight that was not generated for a campaign).
    pub campaign_id: Option<Uuid>,
    /// The action that occurred (e.g. `"insight_matched"`, `"task_created"`).
    pub action_type: String,
    /// Human-readable description of what happened.
    pub content: String,
    /// When the activity occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to record a new activity entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    /// The user the activity concerns.
    pub user_id: Uuid,
    /// Related campaign, if any.
    pub campaign_id: Option<Uuid>,
    /// Action type.
    pub action_type: String,
    /// Description.
    pub content: String,
}
