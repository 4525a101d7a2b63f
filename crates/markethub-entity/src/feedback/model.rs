//! Client feedback entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Feedback submitted by a client about a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientFeedback {
    /// Unique feedback identifier.
    pub id: Uuid,
    /// The campaign being reviewed.
    pub campaign_id: Uuid,
    /// Client's name.
    pub client_name: String,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Free-text comments.
    pub comments: Option<String>,
    /// When the feedback was submitted.
    pub submitted_at: DateTime<Utc>,
}

/// Data required to submit feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFeedback {
    /// The campaign being reviewed.
    pub campaign_id: Uuid,
    /// Client's name.
    pub client_name: String,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Comments.
    pub comments: Option<String>,
}
