//! Route handlers organized by domain.

pub mod activity;
pub mod asset;
pub mod auth;
pub mod campaign;
pub mod feedback;
pub mod finance;
pub mod health;
pub mod insight;
pub mod notification;
pub mod task;
pub mod template;
pub mod ws;
