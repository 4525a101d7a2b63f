//! # markethub-entity
//!
//! Domain entity models for MarketHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

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
