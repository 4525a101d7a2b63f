//! Campaign entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::CampaignStatus;

/// A real-estate marketing campaign.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Campaign {
    /// Unique campaign identifier.
    pub id: Uuid,
    /// Campaign name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: CampaignStatus,
    /// Property type being marketed (e.g. `"condo"`, `"luxury"`).
    pub property_type: Option<String>,
    /// Target market location.
    pub location: Option<String>,
    /// Allocated budget in dollars.
    pub budget: Option<f64>,
    /// Campaign start date.
    pub start_date: Option<DateTime<Utc>>,
    /// Campaign end date.
    pub end_date: Option<DateTime<Utc>>,
    /// The user who created the campaign.
    pub created_by: Uuid,
    /// When the campaign was created.
    pub created_at: DateTime<Utc>,
    /// When the campaign was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Check whether the campaign is currently running.
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }
}

/// Data required to create a new campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampaign {
    /// Campaign name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Property type.
    pub property_type: Option<String>,
    /// Target location.
    pub location: Option<String>,
    /// Budget in dollars.
    pub budget: Option<f64>,
    /// Start date.
    pub start_date: Option<DateTime<Utc>>,
    /// End date.
    pub end_date: Option<DateTime<Utc>>,
    /// Creating user.
    pub created_by: Uuid,
}

/// Partial update for an existing campaign. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCampaign {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<CampaignStatus>,
    /// New property type.
    pub property_type: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New budget.
    pub budget: Option<f64>,
    /// New start date.
    pub start_date: Option<DateTime<Utc>>,
    /// New end date.
    pub end_date: Option<DateTime<Utc>>,
}

/// Aggregated performance figures for a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignMetrics {
    /// The campaign these metrics describe.
    pub campaign_id: Uuid,
    /// Sum of all recorded costs.
    pub total_cost: f64,
    /// Sum of all recorded revenue.
    pub total_revenue: f64,
    /// Return on investment as a percentage (`None` when no costs recorded).
    pub roi_percent: Option<f64>,
    /// Total number of tasks.
    pub task_count: i64,
    /// Number of completed tasks.
    pub tasks_done: i64,
    /// Average client feedback rating (`None` when no feedback).
    pub average_rating: Option<f64>,
}
