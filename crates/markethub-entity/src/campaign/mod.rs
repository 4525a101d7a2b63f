//! Campaign domain entities.

pub mod model;
pub mod status;

pub use model::{Campaign, CampaignMetrics, CreateCampaign, UpdateCampaign};
pub use status::CampaignStatus;
