//! Insight share link entity with custom branding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A public share link exposing one insight under custom branding.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InsightShare {
    /// Unique share identifier.
    pub id: Uuid,
    /// The shared insight.
    pub insight_id: Uuid,
    /// URL-safe access token.
    pub token: String,
    /// Branding applied to the public view (JSON, see [`ShareBranding`]).
    pub branding: serde_json::Value,
    /// The user who created the share.
    pub created_by: Uuid,
    /// When the share was created.
    pub created_at: DateTime<Utc>,
    /// When the share stops working (never, if unset).
    pub expires_at: Option<DateTime<Utc>>,
}

impl InsightShare {
    /// Check whether the share link has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at.map(|e| e <= Utc::now()).unwrap_or(false)
    }
}

/// Custom branding shown on the public share page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareBranding {
    /// Company or agent name to display.
    pub company_name: Option<String>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Primary accent color (CSS hex).
    pub primary_color: Option<String>,
}

/// Data required to create a share link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInsightShare {
    /// The insight to share.
    pub insight_id: Uuid,
    /// Branding for the public view.
    pub branding: ShareBranding,
    /// Creating user.
    pub created_by: Uuid,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
}
