//! Inbound and outbound WebSocket message type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Messages sent by the client to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    /// Pong response to server ping.
    Pong {
        /// Echoed timestamp.
        timestamp: i64,
    },
    /// Mark a notification as read.
    MarkRead {
        /// Notification ID.
        notification_id: Uuid,
    },
}

/// Messages sent by the server to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Insight alert delivery.
    Notification {
        /// Unique message ID.
        id: Uuid,
        /// Notification category.
        category: Option<String>,
        /// Notification title.
        title: String,
        /// Notification body.
        message: String,
        /// Additional payload (deep link, relevance score).
        payload: Option<serde_json::Value>,
        /// Timestamp.
        timestamp: DateTime<Utc>,
    },
    /// Unread inbox count update.
    UnreadCount {
        /// Current unread count.
        count: i64,
    },
    /// Ping (server keepalive).
    Ping {
        /// Server timestamp.
        timestamp: i64,
    },
    /// Error message.
    Error {
        /// Error code.
        code: String,
        /// Error description.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_tagged_decoding() {
        let raw = r#"{"type":"mark_read","notification_id":"8c7f3f1e-1f5e-4d85-bb9e-0de51cd17a9c"}"#;
        let msg: InboundMessage = serde_json::from_str(raw).unwrap();
        assert!(matches!(msg, InboundMessage::MarkRead { .. }));
    }

    #[test]
    fn test_outbound_tag_is_snake_case() {
        let msg = OutboundMessage::UnreadCount { count: 3 };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "unread_count");
        assert_eq!(json["count"], 3);
    }
}
