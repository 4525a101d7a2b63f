//! # markethub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all MarketHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;
