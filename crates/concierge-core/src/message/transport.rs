//! Message transport trait.

use async_trait::async_trait;

use super::model::{OutgoingMessage, TransportAck};
use crate::error::Result;

/// Best-effort delivery channel to travelers.
///
/// An `Ok` means the transport accepted the message; the console does not wait
/// for delivery receipts and never retries.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, message: &OutgoingMessage) -> Result<TransportAck>;
}
