//! Connection manager — handles connection lifecycle and message routing.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use markethub_core::config::RealtimeConfig;
use markethub_entity::user::UserRole;

use crate::message::OutboundMessage;

use super::handle::{ConnectionHandle, ConnectionId};
use super::pool::ConnectionPool;

/// Manages all active WebSocket connections.
#[derive(Debug)]
pub struct ConnectionManager {
    /// Connection pool.
    pool: ConnectionPool,
    /// Configuration.
    config: RealtimeConfig,
}

impl ConnectionManager {
    /// Creates a new connection manager.
    pub fn new(config: RealtimeConfig) -> Self {
        Self {
            pool: ConnectionPool::new(),
            config,
        }
    }

    /// Registers a new authenticated connection.
    ///
    /// Returns the connection handle and the receiver end of its outbound
    /// message queue.
    pub fn register(
        &self,
        user_id: Uuid,
        role: UserRole,
        username: String,
    ) -> (Arc<ConnectionHandle>, mpsc::Receiver<OutboundMessage>) {
        let (tx, rx) = mpsc::channel(self.config.channel_buffer_size);
        let handle = Arc::new(ConnectionHandle::new(user_id, role, username, tx));

        // At the per-user limit, the oldest connection gives way.
        let existing = self.pool.get_user_connections(&user_id);
        if existing.len() >= self.config.max_connections_per_user {
            warn!(
                user_id = %user_id,
                count = existing.len(),
                max = self.config.max_connections_per_user,
                "User at max connections, replacing oldest"
            );
            if let Some(oldest) = existing.first() {
                oldest.mark_dead();
                self.pool.remove(&oldest.id);
            }
        }

        self.pool.add(handle.clone());
        info!(conn_id = %handle.id, user_id = %user_id, "WebSocket connection registered");

        (handle, rx)
    }

    /// Unregisters a connection.
    pub fn unregister(&self, conn_id: &ConnectionId) {
        if let Some(handle) = self.pool.remove(conn_id) {
            handle.mark_dead();
            info!(conn_id = %conn_id, user_id = %handle.user_id,
                  "WebSocket connection unregistered");
        }
    }

    /// Whether the user has at least one live connection.
    pub fn is_online(&self, user_id: Uuid) -> bool {
        self.pool.is_online(&user_id)
    }

    /// Sends a message to all of a user's connections.
    ///
    /// Returns the number of connections the message was queued on.
    pub fn send_to_user(&self, user_id: Uuid, msg: OutboundMessage) -> usize {
        let mut delivered = 0;
        for conn in self.pool.get_user_connections(&user_id) {
            if conn.send(msg.clone()) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Sends a message to every live connection.
    pub fn broadcast(&self, msg: OutboundMessage) -> usize {
        let mut delivered = 0;
        for conn in self.pool.all_connections() {
            if conn.send(msg.clone()) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Active connection count.
    pub fn connection_count(&self) -> usize {
        self.pool.connection_count()
    }

    /// Keepalive ping interval.
    pub fn ping_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.config.ping_interval_seconds)
    }
}
