//! Email template repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use markethub_core::error::{AppError, ErrorKind};
use markethub_core::result::AppResult;
use markethub_entity::template::model::{CreateEmailTemplate, EmailTemplate, UpdateEmailTemplate};

/// Repository for email templates.
#[derive(Debug, Clone)]
pub struct EmailTemplateRepository {
    pool: PgPool,
}

impl EmailTemplateRepository {
    /// Create a new template repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a template by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EmailTemplate>> {
        sqlx::query_as::<_, EmailTemplate>("SELECT * FROM email_templates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find template", e))
    }

    /// List all templates, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<EmailTemplate>> {
        sqlx::query_as::<_, EmailTemplate>(
            "SELECT * FROM email_templates ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list templates", e))
    }

    /// Create a template.
    pub async fn create(&self, data: &CreateEmailTemplate) -> AppResult<EmailTemplate> {
        sqlx::query_as::<_, EmailTemplate>(
            "INSERT INTO email_templates (name, subject, body_html, category, created_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.subject)
        .bind(&data.body_html)
        .bind(&data.category)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create template", e))
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateEmailTemplate,
    ) -> AppResult<Option<EmailTemplate>> {
        sqlx::query_as::<_, EmailTemplate>(
            "UPDATE email_templates SET \
                name = COALESCE($2, name), \
                subject = COALESCE($3, subject), \
                body_html = COALESCE($4, body_html), \
                category = COALESCE($5, category), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.subject)
        .bind(&data.body_html)
        .bind(&data.category)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update template", e))
    }

    /// Delete a template. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM email_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete template", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
