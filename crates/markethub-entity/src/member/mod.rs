//! Team member domain entities.

pub mod model;

pub use model::{AddTeamMember, TeamMember};
