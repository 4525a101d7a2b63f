//! Email template CRUD.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_database::repositories::template::EmailTemplateRepository;
use markethub_entity::template::{CreateEmailTemplate, EmailTemplate, UpdateEmailTemplate};

use crate::context::RequestContext;

/// Manages reusable email templates.
#[derive(Debug, Clone)]
pub struct TemplateService {
    /// Template repository.
    template_repo: Arc<EmailTemplateRepository>,
}

impl TemplateService {
    /// Creates a new template service.
    pub fn new(template_repo: Arc<EmailTemplateRepository>) -> Self {
        Self { template_repo }
    }

    /// Lists all templates.
    pub async fn list(&self) -> AppResult<Vec<EmailTemplate>> {
        self.template_repo.find_all().await
    }

    /// Gets one template by id.
    pub async fn get(&self, id: Uuid) -> AppResult<EmailTemplate> {
        self.template_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Template not found"))
    }

    /// Creates a new template.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateEmailTemplate,
    ) -> AppResult<EmailTemplate> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Template name cannot be empty"));
        }
        if data.subject.trim().is_empty() {
            return Err(AppError::validation("Template subject cannot be empty"));
        }
        data.created_by = ctx.user_id;

        let template = self.template_repo.create(&data).await?;
        info!(template_id = %template.id, user_id = %ctx.user_id, "Template created");
        Ok(template)
    }

    /// Applies a partial update to a template.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateEmailTemplate,
    ) -> AppResult<EmailTemplate> {
        let template = self
            .template_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Template not found"))?;

        info!(template_id = %id, user_id = %ctx.user_id, "Template updated");
        Ok(template)
    }

    /// Deletes a template.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if self.template_repo.delete(id).await? {
            info!(template_id = %id, user_id = %ctx.user_id, "Template deleted");
            Ok(())
        } else {
            Err(AppError::not_found("Template not found"))
        }
    }
}
