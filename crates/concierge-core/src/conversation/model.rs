//! AI conversation domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::sentiment::SentimentBand;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConversationStatus {
    Active,
    Escalated,
    Resolved,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A read-only snapshot of an AI-handled conversation with one traveler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub traveler_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    pub status: ConversationStatus,
    pub priority: Priority,
    pub sentiment_score: f64,
    #[serde(rename = "last_message_at")]
    pub last_activity_at: DateTime<Utc>,
}

impl Conversation {
    pub fn sentiment(&self) -> SentimentBand {
        SentimentBand::from_score(self.sentiment_score)
    }

    pub fn needs_attention(&self) -> bool {
        self.status == ConversationStatus::Escalated || self.priority == Priority::Urgent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_order_by_severity() {
        assert!(Priority::Urgent > Priority::High);
        assert!(Priority::Low < Priority::Medium);
    }

    #[test]
    fn escalated_conversation_needs_attention() {
        let conversation = Conversation {
            id: "2".into(),
            traveler_id: "2".into(),
            agent_id: None,
            status: ConversationStatus::Escalated,
            priority: Priority::High,
            sentiment_score: 0.2,
            last_activity_at: Utc::now(),
        };

        assert!(conversation.needs_attention());
        assert_eq!(conversation.sentiment(), SentimentBand::Negative);
    }
}
