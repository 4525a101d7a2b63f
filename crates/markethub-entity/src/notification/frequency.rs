//! Notification frequency limit enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a user wants to receive insight notifications.
///
/// Informational for the matcher itself; the digest worker uses it to
/// decide who is contacted immediately versus batched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "frequency_limit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FrequencyLimit {
    /// Deliver as soon as a match occurs.
    Immediate,
    /// Batch into one daily digest.
    Daily,
    /// Batch into one weekly digest.
    Weekly,
}

impl FrequencyLimit {
    /// Return the limit as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for FrequencyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
