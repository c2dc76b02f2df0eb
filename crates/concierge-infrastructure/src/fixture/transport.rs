use async_trait::async_trait;
use chrono::{DateTime, Utc};
use concierge_core::error::Result;
use concierge_core::message::{MessageTransport, OutgoingMessage, TransportAck};
use tokio::sync::Mutex;
use uuid::Uuid;

/// A message accepted by [`InMemoryTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutboxEntry {
    pub message_id: String,
    pub message: OutgoingMessage,
    pub accepted_at: DateTime<Utc>,
}

/// Accepts every message and keeps it in an outbox.
#[derive(Default)]
pub struct InMemoryTransport {
    outbox: Mutex<Vec<OutboxEntry>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything accepted so far, oldest first.
    pub async fn outbox(&self) -> Vec<OutboxEntry> {
        self.outbox.lock().await.clone()
    }
}

#[async_trait]
impl MessageTransport for InMemoryTransport {
    async fn send(&self, message: &OutgoingMessage) -> Result<TransportAck> {
        let message_id = Uuid::new_v4().to_string();
        tracing::info!(
            "[InMemoryTransport] Accepted {} message {} for {} recipient(s)",
            message.mode,
            message_id,
            message.recipients.len()
        );

        self.outbox.lock().await.push(OutboxEntry {
            message_id: message_id.clone(),
            message: message.clone(),
            accepted_at: Utc::now(),
        });

        Ok(TransportAck {
            message_id: Some(message_id),
        })
    }
}
