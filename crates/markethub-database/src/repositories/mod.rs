//! Concrete repository implementations, one per entity.

pub mod activity;
pub mod asset;
pub mod campaign;
pub mod feedback;
pub mod finance;
pub mod insight;
pub mod member;
pub mod notification;
pub mod task;
pub mod template;
pub mod user;
