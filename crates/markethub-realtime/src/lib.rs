//! # markethub-realtime
//!
//! WebSocket real-time engine for MarketHub. Tracks authenticated
//! connections per user and delivers insight alerts: online users get a
//! WebSocket push, offline users get a persisted notification row that
//! the REST inbox serves later.
//!
//! ## Modules
//!
//! - `connection` — connection handle, pool, lifecycle manager, JWT auth
//! - `message` — inbound/outbound wire types
//! - `dispatcher` — routes alerts to sockets or persistence
//! - `server` — the assembled engine

pub mod connection;
pub mod dispatcher;
pub mod message;
pub mod server;

pub use connection::{ConnectionHandle, ConnectionManager, ConnectionPool, WsAuthenticator};
pub use dispatcher::NotificationDispatcher;
pub use message::{InboundMessage, OutboundMessage};
pub use server::RealtimeEngine;
