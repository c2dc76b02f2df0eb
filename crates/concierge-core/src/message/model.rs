//! Message composition models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageMode {
    /// One traveler, chosen explicitly.
    #[default]
    Manual,
    /// Every traveler in the selection set.
    Bulk,
}

/// The in-progress, not yet sent message.
///
/// In bulk mode the recipients are the container's selection set, so only the
/// manual recipient is stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMessage {
    pub mode: MessageMode,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

impl DraftMessage {
    pub fn new(mode: MessageMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// The manual recipient, if one is set and non-empty.
    pub fn manual_recipient(&self) -> Option<&str> {
        self.recipient.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.recipient.is_none()
    }
}

/// What the transport receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub mode: MessageMode,
    pub recipients: Vec<String>,
    pub body: String,
}

/// Acknowledgement returned by a transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportAck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReceipt {
    pub mode: MessageMode,
    pub recipient_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub sent_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_body_is_not_a_body() {
        let draft = DraftMessage {
            body: "  \n\t".into(),
            ..DraftMessage::default()
        };
        assert!(!draft.has_body());
    }

    #[test]
    fn empty_recipient_is_treated_as_missing() {
        let draft = DraftMessage {
            recipient: Some(String::new()),
            ..DraftMessage::default()
        };
        assert_eq!(draft.manual_recipient(), None);
    }

    #[test]
    fn mode_parses_from_tag() {
        assert_eq!("bulk".parse::<MessageMode>().unwrap(), MessageMode::Bulk);
        assert!("broadcast".parse::<MessageMode>().is_err());
    }
}
