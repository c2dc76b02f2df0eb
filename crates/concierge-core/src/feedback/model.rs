//! Feedback center domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::conversation::Priority;
use crate::sentiment::SentimentBand;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeedbackKind {
    Complaint,
    Suggestion,
    Ticket,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeedbackStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

/// A complaint, suggestion or support ticket raised by a traveler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    /// Traveler display name as captured with the feedback.
    pub traveler: String,
    pub destination: String,
    pub subject: String,
    pub content: String,
    pub priority: Priority,
    pub status: FeedbackStatus,
    pub created_at: DateTime<Utc>,
    pub sentiment: f64,
}

impl FeedbackItem {
    pub fn is_open(&self) -> bool {
        self.status == FeedbackStatus::Open
    }

    pub fn sentiment_band(&self) -> SentimentBand {
        SentimentBand::from_score(self.sentiment)
    }
}

/// Counters shown above the feedback list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub complaints: usize,
    pub suggestions: usize,
    pub tickets: usize,
    pub urgent: usize,
}

impl FeedbackStats {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a FeedbackItem>) -> Self {
        items.into_iter().fold(Self::default(), |mut stats, item| {
            match item.kind {
                FeedbackKind::Complaint => stats.complaints += 1,
                FeedbackKind::Suggestion => stats.suggestions += 1,
                FeedbackKind::Ticket => stats.tickets += 1,
            }
            if item.priority == Priority::Urgent {
                stats.urgent += 1;
            }
            stats
        })
    }
}
