//! Marketing asset entity model.
//!
//! Assets are metadata records pointing at externally hosted creative
//! material; MarketHub does not store the binary content itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A creative asset attached to a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asset {
    /// Unique asset identifier.
    pub id: Uuid,
    /// Owning campaign.
    pub campaign_id: Uuid,
    /// Asset name.
    pub name: String,
    /// Asset kind: `"image"`, `"video"`, `"document"`, or `"copy"`.
    pub kind: String,
    /// URL where the asset is hosted.
    pub url: String,
    /// Additional structured data (dimensions, alt text, etc.).
    pub metadata: Option<serde_json::Value>,
    /// The user who registered the asset.
    pub uploaded_by: Uuid,
    /// When the asset was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsset {
    /// Owning campaign.
    pub campaign_id: Uuid,
    /// Asset name.
    pub name: String,
    /// Asset kind.
    pub kind: String,
    /// Hosted URL.
    pub url: String,
    /// Additional metadata.
    pub metadata: Option<serde_json::Value>,
    /// Registering user.
    pub uploaded_by: Uuid,
}
