//! Campaign revenue entry entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Revenue attributed to a campaign (e.g. a closed sale commission).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RevenueEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Owning campaign.
    pub campaign_id: Uuid,
    /// What generated the revenue.
    pub description: String,
    /// Amount in dollars.
    pub amount: f64,
    /// When the revenue was realized.
    pub realized_at: DateTime<Utc>,
    /// Recording user.
    pub created_by: Uuid,
}

/// Data required to record a revenue entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRevenueEntry {
    /// Owning campaign.
    pub campaign_id: Uuid,
    /// Description.
    pub description: String,
    /// Amount in dollars.
    pub amount: f64,
    /// When the revenue was realized.
    pub realized_at: DateTime<Utc>,
    /// Recording user.
    pub created_by: Uuid,
}
