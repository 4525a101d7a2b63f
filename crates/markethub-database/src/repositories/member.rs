//! Team member repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use markethub_core::error::{AppError, ErrorKind};
use markethub_core::result::AppResult;
use markethub_entity::member::model::{AddTeamMember, TeamMember};

/// Repository for campaign team membership.
#[derive(Debug, Clone)]
pub struct TeamMemberRepository {
    pool: PgPool,
}

impl TeamMemberRepository {
    /// Create a new team member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List members of a campaign.
    pub async fn find_by_campaign(&self, campaign_id: Uuid) -> AppResult<Vec<TeamMember>> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE campaign_id = $1 ORDER BY added_at",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list team members", e))
    }

    /// Add a member to a campaign team.
    pub async fn add(&self, data: &AddTeamMember) -> AppResult<TeamMember> {
        sqlx::query_as::<_, TeamMember>(
            "INSERT INTO team_members (user_id, campaign_id, member_role) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.campaign_id)
        .bind(&data.member_role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("User is already a member of this campaign")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to add team member", e),
        })
    }

    /// Remove a member. Returns whether a row was removed.
    pub async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove team member", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
