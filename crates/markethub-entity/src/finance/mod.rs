//! Cost and revenue tracking entities.

pub mod cost;
pub mod revenue;

pub use cost::{CostEntry, CreateCostEntry};
pub use revenue::{CreateRevenueEntry, RevenueEntry};
