use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use concierge_core::error::{ConsoleError, Result, ValidationError};
use concierge_core::message::{
    DispatchReceipt, DraftMessage, MessageMode, MessageTransport, OutgoingMessage, TransportAck,
};

/// Checks the dispatch guards and builds what the transport will receive.
///
/// Pure: nothing is sent and nothing is cleared here.
pub fn prepare(
    mode: MessageMode,
    draft: &DraftMessage,
    selection: &BTreeSet<String>,
) -> std::result::Result<OutgoingMessage, ValidationError> {
    if !draft.has_body() {
        return Err(ValidationError::EmptyBody);
    }

    let recipients = match mode {
        MessageMode::Manual => vec![
            draft
                .manual_recipient()
                .ok_or(ValidationError::MissingRecipient)?
                .to_string(),
        ],
        MessageMode::Bulk => {
            if selection.is_empty() {
                return Err(ValidationError::EmptySelection);
            }
            selection.iter().cloned().collect()
        }
    };

    Ok(OutgoingMessage {
        mode,
        recipients,
        body: draft.body.clone(),
    })
}

/// Submits prepared messages to the transport, one at a time.
pub struct MessageDispatcher {
    transport: Option<Arc<dyn MessageTransport>>,
    in_flight: Arc<AtomicBool>,
}

impl MessageDispatcher {
    pub fn new(transport: Arc<dyn MessageTransport>) -> Self {
        Self {
            transport: Some(transport),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A dispatcher with no transport acknowledges every message at once.
    pub fn without_transport() -> Self {
        Self {
            transport: None,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Claims the single dispatch slot. The slot frees when the guard drops.
    pub fn begin(&self) -> std::result::Result<InFlightGuard, ValidationError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ValidationError::DispatchInFlight)?;
        Ok(InFlightGuard {
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    /// Hands `message` to the transport. No retries.
    ///
    /// # Errors
    ///
    /// Any transport failure comes back as `ConsoleError::DispatchTransport`.
    pub async fn submit(&self, message: &OutgoingMessage) -> Result<DispatchReceipt> {
        let ack = match &self.transport {
            Some(transport) => transport.send(message).await.map_err(|e| match e {
                ConsoleError::DispatchTransport(_) => e,
                other => ConsoleError::transport(other.to_string()),
            })?,
            None => TransportAck::default(),
        };

        Ok(DispatchReceipt {
            mode: message.mode,
            recipient_count: message.recipients.len(),
            message_id: ack.message_id,
            sent_at: Utc::now(),
        })
    }
}

#[derive(Debug)]
#[must_use = "the dispatch slot frees as soon as the guard is dropped"]
pub struct InFlightGuard {
    in_flight: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }
}
