//! Marketing insight entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An AI-generated marketing trend or recommendation.
///
/// Insights are created once by the insight-generation workflow and are
/// immutable afterwards, except for deletion. The optional classification
/// fields (`category`, `property_type`, `location`) drive preference
/// matching; absence of a field means the corresponding matching criterion
/// is skipped, never failed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MarketingInsight {
    /// Unique insight identifier.
    pub id: Uuid,
    /// Insight category (e.g. `"luxury"`, `"pricing"`).
    pub category: Option<String>,
    /// Property type the insight applies to.
    pub property_type: Option<String>,
    /// Location the insight applies to.
    pub location: Option<String>,
    /// Free-text summary of the insight.
    pub summary: String,
    /// Ordered keyword list extracted during generation.
    pub keywords: Vec<String>,
    /// Associated campaign (if any).
    pub campaign_id: Option<Uuid>,
    /// The user on whose behalf the insight was generated.
    pub created_by: Uuid,
    /// When the insight was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new insight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInsight {
    /// Category.
    pub category: Option<String>,
    /// Property type.
    pub property_type: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Summary text.
    pub summary: String,
    /// Keyword list.
    pub keywords: Vec<String>,
    /// Associated campaign.
    pub campaign_id: Option<Uuid>,
    /// Creating user.
    pub created_by: Uuid,
}
