//! Task CRUD scoped to campaigns.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_database::repositories::campaign::CampaignRepository;
use markethub_database::repositories::task::TaskRepository;
use markethub_entity::task::{CreateTask, Task, UpdateTask};

use crate::context::RequestContext;

/// Manages campaign tasks.
#[derive(Debug, Clone)]
pub struct TaskService {
    /// Task repository.
    task_repo: Arc<TaskRepository>,
    /// Campaign repository, for scoping checks.
    campaign_repo: Arc<CampaignRepository>,
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(task_repo: Arc<TaskRepository>, campaign_repo: Arc<CampaignRepository>) -> Self {
        Self {
            task_repo,
            campaign_repo,
        }
    }

    /// Lists tasks for a campaign.
    pub async fn list_for_campaign(&self, campaign_id: Uuid) -> AppResult<Vec<Task>> {
        self.ensure_campaign(campaign_id).await?;
        self.task_repo.find_by_campaign(campaign_id).await
    }

    /// Gets one task by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Task> {
        self.task_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))
    }

    /// Creates a task inside a campaign.
    pub async fn create(&self, ctx: &RequestContext, data: CreateTask) -> AppResult<Task> {
        if data.title.trim().is_empty() {
            return Err(AppError::validation("Task title cannot be empty"));
        }
        self.ensure_campaign(data.campaign_id).await?;

        let task = self.task_repo.create(&data).await?;
        info!(task_id = %task.id, campaign_id = %task.campaign_id,
              user_id = %ctx.user_id, "Task created");
        Ok(task)
    }

    /// Applies a partial update to a task (including status moves).
    pub async fn update(&self, ctx: &RequestContext, id: Uuid, data: UpdateTask) -> AppResult<Task> {
        if data.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::validation("Task title cannot be empty"));
        }

        let task = self
            .task_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;

        info!(task_id = %id, user_id = %ctx.user_id, status = %task.status, "Task updated");
        Ok(task)
    }

    /// Deletes a task.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if self.task_repo.delete(id).await? {
            info!(task_id = %id, user_id = %ctx.user_id, "Task deleted");
            Ok(())
        } else {
            Err(AppError::not_found("Task not found"))
        }
    }

    async fn ensure_campaign(&self, campaign_id: Uuid) -> AppResult<()> {
        self.campaign_repo
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| AppError::not_found("Campaign not found"))?;
        Ok(())
    }
}
