//! # markethub-api
//!
//! HTTP API layer for MarketHub built on Axum.
//!
//! Provides all REST endpoints, the WebSocket upgrade, middleware
//! (CORS, logging, compression), extractors, and DTOs.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
