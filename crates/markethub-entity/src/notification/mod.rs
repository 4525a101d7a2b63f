//! Notification domain entities.

pub mod frequency;
pub mod model;
pub mod preference;

pub use frequency::FrequencyLimit;
pub use model::Notification;
pub use preference::NotificationPreference;
