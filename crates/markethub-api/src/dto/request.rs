//! Request DTOs with validation.
//!
//! Bodies that carry server-assigned fields (`created_by`, `uploaded_by`)
//! get a dedicated DTO here; the handler converts to the entity type with
//! the authenticated user filled in. Pure-client bodies reuse the entity
//! `Create*`/`Update*` types directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use markethub_entity::insight::{CreateInsight, ShareBranding};
use markethub_entity::notification::{FrequencyLimit, NotificationPreference};
use markethub_entity::user::UserRole;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Password.
    #[validate(length(min = 8))]
    pub password: String,
    /// Email.
    #[validate(email)]
    pub email: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Requested role; defaults to agent.
    pub role: Option<UserRole>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Create campaign request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCampaignRequest {
    /// Campaign name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Targeted property type.
    pub property_type: Option<String>,
    /// Targeted location.
    pub location: Option<String>,
    /// Budget.
    pub budget: Option<f64>,
    /// Start date.
    pub start_date: Option<DateTime<Utc>>,
    /// End date.
    pub end_date: Option<DateTime<Utc>>,
}

/// Upload asset request. The owning campaign comes from the URL path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAssetRequest {
    /// Asset name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Asset kind (image, video, document, copy).
    pub kind: String,
    /// Asset URL.
    #[validate(length(min = 1))]
    pub url: String,
    /// Free-form metadata.
    pub metadata: Option<serde_json::Value>,
}

/// Create email template request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTemplateRequest {
    /// Template name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Subject line.
    #[validate(length(min = 1))]
    pub subject: String,
    /// HTML body.
    pub body_html: String,
    /// Category.
    pub category: Option<String>,
}

/// Record cost request. The owning campaign comes from the URL path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCostRequest {
    /// What was paid for.
    #[validate(length(min = 1))]
    pub description: String,
    /// Cost category.
    pub category: Option<String>,
    /// Amount spent.
    pub amount: f64,
    /// When the cost was incurred; defaults to now.
    pub incurred_at: Option<DateTime<Utc>>,
}

/// Record revenue request. The owning campaign comes from the URL path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRevenueRequest {
    /// Revenue source.
    #[validate(length(min = 1))]
    pub description: String,
    /// Amount earned.
    pub amount: f64,
    /// When the revenue was realized; defaults to now.
    pub realized_at: Option<DateTime<Utc>>,
}

/// Create insight request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInsightRequest {
    /// Insight category.
    pub category: Option<String>,
    /// Property type the insight concerns.
    pub property_type: Option<String>,
    /// Location the insight concerns.
    pub location: Option<String>,
    /// Insight text.
    #[validate(length(min = 1))]
    pub summary: String,
    /// Topic keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Optional campaign attribution.
    pub campaign_id: Option<Uuid>,
}

impl CreateInsightRequest {
    /// Converts to the entity type with the creator filled in.
    pub fn into_create(self, created_by: Uuid) -> CreateInsight {
        CreateInsight {
            category: self.category,
            property_type: self.property_type,
            location: self.location,
            summary: self.summary,
            keywords: self.keywords,
            campaign_id: self.campaign_id,
            created_by,
        }
    }
}

/// Create share link request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShareRequest {
    /// Branding applied to the shared page.
    #[serde(default)]
    pub branding: ShareBranding,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Update notification preferences request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePreferencesRequest {
    /// Master switch.
    pub enabled: bool,
    /// Insight categories of interest.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Property types of interest.
    #[serde(default)]
    pub property_types: Vec<String>,
    /// Locations of interest.
    #[serde(default)]
    pub locations: Vec<String>,
    /// Keywords of interest.
    #[serde(default)]
    pub keyword_matches: Vec<String>,
    /// Minimum relevance score to notify.
    pub relevance_threshold: i32,
    /// Email delivery switch.
    pub email_notifications: bool,
    /// In-app delivery switch.
    pub app_notifications: bool,
    /// Delivery frequency cap.
    pub frequency_limit: FrequencyLimit,
}

impl UpdatePreferencesRequest {
    /// Converts to the entity type for the given user.
    pub fn into_preferences(self, user_id: Uuid) -> NotificationPreference {
        NotificationPreference {
            user_id,
            enabled: self.enabled,
            categories: self.categories,
            property_types: self.property_types,
            locations: self.locations,
            keyword_matches: self.keyword_matches,
            relevance_threshold: self.relevance_threshold,
            email_notifications: self.email_notifications,
            app_notifications: self.app_notifications,
            frequency_limit: self.frequency_limit,
            updated_at: Utc::now(),
        }
    }
}
