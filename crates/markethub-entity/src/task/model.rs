//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TaskStatus;

/// A unit of work inside a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Owning campaign.
    pub campaign_id: Uuid,
    /// Short task title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Progress status.
    pub status: TaskStatus,
    /// Assigned user (if any).
    pub assignee_id: Option<Uuid>,
    /// Due date.
    pub due_date: Option<DateTime<Utc>>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Check whether the task is overdue.
    pub fn is_overdue(&self) -> bool {
        self.status != TaskStatus::Done
            && self.due_date.map(|d| d < Utc::now()).unwrap_or(false)
    }
}

/// Data required to create a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Owning campaign.
    pub campaign_id: Uuid,
    /// Task title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Assignee.
    pub assignee_id: Option<Uuid>,
    /// Due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update for an existing task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<TaskStatus>,
    /// New assignee.
    pub assignee_id: Option<Uuid>,
    /// New due date.
    pub due_date: Option<DateTime<Utc>>,
}
