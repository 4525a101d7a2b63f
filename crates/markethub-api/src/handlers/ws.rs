//! WebSocket upgrade handler.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use chrono::Utc;
use futures::{SinkExt, StreamExt};
use tracing::{info, warn};

use markethub_core::error::AppError;
use markethub_realtime::connection::authenticator::AuthenticatedConnection;
use markethub_realtime::message::{InboundMessage, OutboundMessage};
use markethub_service::context::RequestContext;

use crate::state::AppState;

/// Query parameter for WebSocket authentication.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    /// JWT access token.
    pub token: String,
}

/// GET /ws?token={jwt} — WebSocket upgrade
pub async fn ws_handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
) -> Result<Response, AppError> {
    // Authenticate before upgrade
    let auth_info = state.realtime.authenticator.authenticate(&query.token)?;

    Ok(ws.on_upgrade(move |socket| handle_ws_connection(state, auth_info, socket)))
}

/// Handles an established WebSocket connection.
async fn handle_ws_connection(state: AppState, auth: AuthenticatedConnection, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    // Register connection
    let (handle, mut outbound_rx) = state.realtime.connections.register(
        auth.user_id,
        auth.role,
        auth.username.clone(),
    );

    let conn_id = handle.id;

    info!(
        conn_id = %conn_id,
        user_id = %auth.user_id,
        "WebSocket connection established"
    );

    // Push the current unread count on connect.
    state.realtime.dispatcher.send_unread_count(auth.user_id).await;

    // Spawn outbound message forwarder
    let outbound_task = tokio::spawn(async move {
        while let Some(msg) = outbound_rx.recv().await {
            let text = match serde_json::to_string(&msg) {
                Ok(text) => text,
                Err(e) => {
                    warn!(error = %e, "Failed to serialize outbound message");
                    continue;
                }
            };
            if ws_tx.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    // Spawn server keepalive pings
    let ping_handle = handle.clone();
    let ping_interval = state.realtime.connections.ping_interval();
    let ping_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(ping_interval);
        interval.tick().await; // first tick is immediate
        loop {
            interval.tick().await;
            if !ping_handle.send(OutboundMessage::Ping {
                timestamp: Utc::now().timestamp_millis(),
            }) {
                break;
            }
        }
    });

    let ctx = RequestContext::new(auth.user_id, auth.role, auth.username.clone());

    // Process inbound messages
    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Text(text)) => {
                handle_inbound(&state, &handle, &ctx, text.as_str()).await;
            }
            Ok(Message::Close(_)) => {
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(conn_id = %conn_id, error = %e, "WebSocket error");
                break;
            }
        }
    }

    // Cleanup
    outbound_task.abort();
    ping_task.abort();
    state.realtime.connections.unregister(&conn_id);

    info!(
        conn_id = %conn_id,
        user_id = %auth.user_id,
        "WebSocket connection closed"
    );
}

/// Routes a single inbound client message.
async fn handle_inbound(
    state: &AppState,
    handle: &markethub_realtime::connection::ConnectionHandle,
    ctx: &RequestContext,
    text: &str,
) {
    let msg: InboundMessage = match serde_json::from_str(text) {
        Ok(msg) => msg,
        Err(_) => {
            handle.send(OutboundMessage::Error {
                code: "BAD_MESSAGE".to_string(),
                message: "Unrecognized message".to_string(),
            });
            return;
        }
    };

    match msg {
        InboundMessage::Pong { .. } => {
            handle.record_pong().await;
        }
        InboundMessage::MarkRead { notification_id } => {
            if let Err(e) = state
                .notification_service
                .mark_read(ctx, notification_id)
                .await
            {
                warn!(user_id = %ctx.user_id, error = %e, "Failed to mark notification read");
                return;
            }
            state.realtime.dispatcher.send_unread_count(ctx.user_id).await;
        }
    }
}
