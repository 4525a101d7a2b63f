//! Email template entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A reusable email template for campaign outreach.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmailTemplate {
    /// Unique template identifier.
    pub id: Uuid,
    /// Template name.
    pub name: String,
    /// Email subject line.
    pub subject: String,
    /// HTML body with placeholder tokens.
    pub body_html: String,
    /// Template category (e.g. `"open_house"`, `"listing_alert"`).
    pub category: Option<String>,
    /// The user who created the template.
    pub created_by: Uuid,
    /// When the template was created.
    pub created_at: DateTime<Utc>,
    /// When the template was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new email template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmailTemplate {
    /// Template name.
    pub name: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub body_html: String,
    /// Category.
    pub category: Option<String>,
    /// Creating user.
    pub created_by: Uuid,
}

/// Partial update for an existing template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmailTemplate {
    /// New name.
    pub name: Option<String>,
    /// New subject line.
    pub subject: Option<String>,
    /// New HTML body.
    pub body_html: Option<String>,
    /// New category.
    pub category: Option<String>,
}
