//! Cost and revenue repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use markethub_core::error::{AppError, ErrorKind};
use markethub_core::result::AppResult;
use markethub_entity::finance::cost::{CostEntry, CreateCostEntry};
use markethub_entity::finance::revenue::{CreateRevenueEntry, RevenueEntry};

/// Repository for campaign cost and revenue tracking.
#[derive(Debug, Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    /// Create a new finance repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List cost entries of a campaign, newest first.
    pub async fn find_costs(&self, campaign_id: Uuid) -> AppResult<Vec<CostEntry>> {
        sqlx::query_as::<_, CostEntry>(
            "SELECT * FROM cost_entries WHERE campaign_id = $1 ORDER BY incurred_at DESC",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list costs", e))
    }

    /// List revenue entries of a campaign, newest first.
    pub async fn find_revenues(&self, campaign_id: Uuid) -> AppResult<Vec<RevenueEntry>> {
        sqlx::query_as::<_, RevenueEntry>(
            "SELECT * FROM revenue_entries WHERE campaign_id = $1 ORDER BY realized_at DESC",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list revenues", e))
    }

    /// Record a cost entry.
    pub async fn create_cost(&self, data: &CreateCostEntry) -> AppResult<CostEntry> {
        sqlx::query_as::<_, CostEntry>(
            "INSERT INTO cost_entries (campaign_id, description, category, amount, incurred_at, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.campaign_id)
        .bind(&data.description)
        .bind(&data.category)
        .bind(data.amount)
        .bind(data.incurred_at)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create cost entry", e))
    }

    /// Record a revenue entry.
    pub async fn create_revenue(&self, data: &CreateRevenueEntry) -> AppResult<RevenueEntry> {
        sqlx::query_as::<_, RevenueEntry>(
            "INSERT INTO revenue_entries (campaign_id, description, amount, realized_at, created_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.campaign_id)
        .bind(&data.description)
        .bind(data.amount)
        .bind(data.realized_at)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create revenue entry", e)
        })
    }

    /// Delete a cost entry. Returns whether a row was removed.
    pub async fn delete_cost(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cost_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete cost entry", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a revenue entry. Returns whether a row was removed.
    pub async fn delete_revenue(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM revenue_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete revenue entry", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Sum of all costs for a campaign.
    pub async fn total_cost(&self, campaign_id: Uuid) -> AppResult<f64> {
        let total: Option<f64> = sqlx::query_scalar(
            "SELECT SUM(amount) FROM cost_entries WHERE campaign_id = $1",
        )
        .bind(campaign_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum costs", e))?;
        Ok(total.unwrap_or(0.0))
    }

    /// Sum of all revenue for a campaign.
    pub async fn total_revenue(&self, campaign_id: Uuid) -> AppResult<f64> {
        let total: Option<f64> = sqlx::query_scalar(
            "SELECT SUM(amount) FROM revenue_entries WHERE campaign_id = $1",
        )
        .bind(campaign_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum revenues", e))?;
        Ok(total.unwrap_or(0.0))
    }
}
