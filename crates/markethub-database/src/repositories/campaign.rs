//! Campaign repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use markethub_core::error::{AppError, ErrorKind};
use markethub_core::result::AppResult;
use markethub_core::types::pagination::{PageRequest, PageResponse};
use markethub_entity::campaign::model::{Campaign, CreateCampaign, UpdateCampaign};

/// Repository for campaign CRUD operations.
#[derive(Debug, Clone)]
pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    /// Create a new campaign repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a campaign by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Campaign>> {
        sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find campaign", e))
    }

    /// List campaigns, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Campaign>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campaigns")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count campaigns", e)
            })?;

        let campaigns = sqlx::query_as::<_, Campaign>(
            "SELECT * FROM campaigns ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list campaigns", e))?;

        Ok(PageResponse::new(
            campaigns,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a campaign.
    pub async fn create(&self, data: &CreateCampaign) -> AppResult<Campaign> {
        sqlx::query_as::<_, Campaign>(
            "INSERT INTO campaigns (name, description, property_type, location, budget, start_date, end_date, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.property_type)
        .bind(&data.location)
        .bind(data.budget)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create campaign", e))
    }

    /// Apply a partial update; untouched fields keep their current value.
    pub async fn update(&self, id: Uuid, data: &UpdateCampaign) -> AppResult<Option<Campaign>> {
        sqlx::query_as::<_, Campaign>(
            "UPDATE campaigns SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                status = COALESCE($4, status), \
                property_type = COALESCE($5, property_type), \
                location = COALESCE($6, location), \
                budget = COALESCE($7, budget), \
                start_date = COALESCE($8, start_date), \
                end_date = COALESCE($9, end_date), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.status)
        .bind(&data.property_type)
        .bind(&data.location)
        .bind(data.budget)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update campaign", e))
    }

    /// Delete a campaign. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete campaign", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
