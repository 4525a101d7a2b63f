//! Team member entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's membership in a campaign team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    /// Unique membership identifier.
    pub id: Uuid,
    /// The member's user account.
    pub user_id: Uuid,
    /// The campaign they belong to.
    pub campaign_id: Uuid,
    /// Role inside the team (free text, e.g. `"photographer"`).
    pub member_role: Option<String>,
    /// When the member was added.
    pub added_at: DateTime<Utc>,
}

/// Data required to add a team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTeamMember {
    /// The user to add.
    pub user_id: Uuid,
    /// The campaign to add them to.
    pub campaign_id: Uuid,
    /// Team role.
    pub member_role: Option<String>,
}
