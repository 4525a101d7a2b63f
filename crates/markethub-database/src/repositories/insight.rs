//! Marketing insight and insight share repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use markethub_core::error::{AppError, ErrorKind};
use markethub_core::result::AppResult;
use markethub_core::types::pagination::{PageRequest, PageResponse};
use markethub_entity::insight::model::{CreateInsight, MarketingInsight};
use markethub_entity::insight::share::InsightShare;

/// Repository for marketing insights and their public share links.
#[derive(Debug, Clone)]
pub struct InsightRepository {
    pool: PgPool,
}

impl InsightRepository {
    /// Create a new insight repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an insight by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MarketingInsight>> {
        sqlx::query_as::<_, MarketingInsight>("SELECT * FROM marketing_insights WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find insight", e))
    }

    /// List insights, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<MarketingInsight>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM marketing_insights")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count insights", e)
            })?;

        let insights = sqlx::query_as::<_, MarketingInsight>(
            "SELECT * FROM marketing_insights ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list insights", e))?;

        Ok(PageResponse::new(
            insights,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Persist a new insight.
    pub async fn create(&self, data: &CreateInsight) -> AppResult<MarketingInsight> {
        sqlx::query_as::<_, MarketingInsight>(
            "INSERT INTO marketing_insights (category, property_type, location, summary, keywords, campaign_id, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.category)
        .bind(&data.property_type)
        .bind(&data.location)
        .bind(&data.summary)
        .bind(&data.keywords)
        .bind(data.campaign_id)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create insight", e))
    }

    /// Delete an insight. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM marketing_insights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete insight", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    // ── Share links ──────────────────────────────────────────────

    /// Create a share link for an insight.
    pub async fn create_share(
        &self,
        insight_id: Uuid,
        token: &str,
        branding: &serde_json::Value,
        created_by: Uuid,
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> AppResult<InsightShare> {
        sqlx::query_as::<_, InsightShare>(
            "INSERT INTO insight_shares (insight_id, token, branding, created_by, expires_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(insight_id)
        .bind(token)
        .bind(branding)
        .bind(created_by)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create share", e))
    }

    /// Find a share by its public token.
    pub async fn find_share_by_token(&self, token: &str) -> AppResult<Option<InsightShare>> {
        sqlx::query_as::<_, InsightShare>("SELECT * FROM insight_shares WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find share", e))
    }

    /// List shares created by a user, newest first.
    pub async fn find_shares_by_user(&self, user_id: Uuid) -> AppResult<Vec<InsightShare>> {
        sqlx::query_as::<_, InsightShare>(
            "SELECT * FROM insight_shares WHERE created_by = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list shares", e))
    }

    /// Delete a share link. Returns whether a row was removed.
    pub async fn delete_share(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM insight_shares WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete share", e))?;
        Ok(result.rows_affected() > 0)
    }
}
