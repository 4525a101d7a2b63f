//! Campaign cost entry entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single recorded expense against a campaign budget.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CostEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Owning campaign.
    pub campaign_id: Uuid,
    /// What the money was spent on.
    pub description: String,
    /// Spend category (e.g. `"photography"`, `"ads"`).
    pub category: Option<String>,
    /// Amount in dollars.
    pub amount: f64,
    /// When the cost was incurred.
    pub incurred_at: DateTime<Utc>,
    /// Recording user.
    pub created_by: Uuid,
}

/// Data required to record a cost entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCostEntry {
    /// Owning campaign.
    pub campaign_id: Uuid,
    /// Description.
    pub description: String,
    /// Spend category.
    pub category: Option<String>,
    /// Amount in dollars.
    pub amount: f64,
    /// When the cost was incurred.
    pub incurred_at: DateTime<Utc>,
    /// Recording user.
    pub created_by: Uuid,
}
