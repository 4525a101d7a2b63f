//! Client feedback repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use markethub_core::error::{AppError, ErrorKind};
use markethub_core::result::AppResult;
use markethub_entity::feedback::model::{ClientFeedback, SubmitFeedback};

/// Repository for client feedback records.
#[derive(Debug, Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    /// Create a new feedback repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List feedback for a campaign, newest first.
    pub async fn find_by_campaign(&self, campaign_id: Uuid) -> AppResult<Vec<ClientFeedback>> {
        sqlx::query_as::<_, ClientFeedback>(
            "SELECT * FROM client_feedback WHERE campaign_id = $1 ORDER BY submitted_at DESC",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list feedback", e))
    }

    /// Average rating for a campaign (`None` when no feedback exists).
    pub async fn average_rating(&self, campaign_id: Uuid) -> AppResult<Option<f64>> {
        sqlx::query_scalar(
            "SELECT AVG(rating)::FLOAT8 FROM client_feedback WHERE campaign_id = $1",
        )
        .bind(campaign_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to average rating", e))
    }

    /// Store a feedback submission.
    pub async fn create(&self, data: &SubmitFeedback) -> AppResult<ClientFeedback> {
        sqlx::query_as::<_, ClientFeedback>(
            "INSERT INTO client_feedback (campaign_id, client_name, rating, comments) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.campaign_id)
        .bind(&data.client_name)
        .bind(data.rating)
        .bind(&data.comments)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create feedback", e))
    }
}
