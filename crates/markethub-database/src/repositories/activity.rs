//! Activity feed repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use markethub_core::error::{AppError, ErrorKind};
use markethub_core::result::AppResult;
use markethub_core::types::pagination::{PageRequest, PageResponse};
use markethub_entity::activity::model::{Activity, NewActivity};

/// Repository for the append-only activity feed.
#[derive(Debug, Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    /// Create a new activity repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record an activity entry.
    pub async fn create(&self, entry: &NewActivity) -> AppResult<Activity> {
        sqlx::query_as::<_, Activity>(
            "INSERT INTO activities (id, user_id, campaign_id, action_type, content) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(entry.user_id)
        .bind(entry.campaign_id)
        .bind(&entry.action_type)
        .bind(&entry.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record activity", e))
    }

    /// List a user's activity, newest first.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Activity>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count activities", e)
            })?;

        let entries = sqlx::query_as::<_, Activity>(
            "SELECT * FROM activities WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list activities", e))?;

        Ok(PageResponse::new(
            entries,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List activity attached to a campaign, newest first.
    pub async fn find_by_campaign(
        &self,
        campaign_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Activity>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM activities WHERE campaign_id = $1")
                .bind(campaign_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count activities", e)
                })?;

        let entries = sqlx::query_as::<_, Activity>(
            "SELECT * FROM activities WHERE campaign_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(campaign_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list activities", e))?;

        Ok(PageResponse::new(
            entries,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Delete activity entries older than the cutoff.
    pub async fn delete_older_than(&self, before: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM activities WHERE created_at < $1")
            .bind(before)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to cleanup activities", e)
            })?;
        Ok(result.rows_affected())
    }
}
