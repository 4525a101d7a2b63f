//! Top-level real-time engine tying the subsystems together.

use std::sync::Arc;

use tracing::info;

use markethub_auth::jwt::JwtDecoder;
use markethub_core::config::RealtimeConfig;
use markethub_database::repositories::notification::NotificationRepository;

use crate::connection::{ConnectionManager, WsAuthenticator};
use crate::dispatcher::NotificationDispatcher;

/// Central real-time engine coordinating connections and delivery.
#[derive(Clone)]
pub struct RealtimeEngine {
    /// Connection manager.
    pub connections: Arc<ConnectionManager>,
    /// Notification dispatcher.
    pub dispatcher: Arc<NotificationDispatcher>,
    /// WebSocket authenticator.
    pub authenticator: WsAuthenticator,
}

impl std::fmt::Debug for RealtimeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeEngine").finish()
    }
}

impl RealtimeEngine {
    /// Creates a new real-time engine.
    pub fn new(
        config: RealtimeConfig,
        decoder: Arc<JwtDecoder>,
        notif_repo: Arc<NotificationRepository>,
    ) -> Self {
        let connections = Arc::new(ConnectionManager::new(config.clone()));
        let dispatcher = Arc::new(NotificationDispatcher::new(
            connections.clone(),
            notif_repo,
            config.notifications,
        ));
        let authenticator = WsAuthenticator::new(decoder);

        info!("Real-time engine initialized");

        Self {
            connections,
            dispatcher,
            authenticator,
        }
    }
}
