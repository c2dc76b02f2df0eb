//! AI conversation domain models.

mod model;

pub use model::{Conversation, ConversationStatus, Priority};
