//! Message composition models and the transport trait.

mod model;
mod transport;

pub use model::{DispatchReceipt, DraftMessage, MessageMode, OutgoingMessage, TransportAck};
pub use transport::MessageTransport;
