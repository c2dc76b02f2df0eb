//! Dashboard snapshot: metrics, conversations and travelers loaded as one unit.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::conversation::{Conversation, ConversationStatus, Priority};
use crate::error::{ConsoleError, Result};
use crate::feedback::{FeedbackItem, FeedbackStats};
use crate::metrics::Metrics;
use crate::sentiment;
use crate::traveler::Traveler;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub metrics: Metrics,
    pub conversations: Vec<Conversation>,
    pub travelers: Vec<Traveler>,
    #[serde(default)]
    pub feedback: Vec<FeedbackItem>,
}

/// Conversation counts for the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub by_status: BTreeMap<String, usize>,
    pub by_priority: BTreeMap<String, usize>,
    pub needing_attention: usize,
}

impl DashboardSnapshot {
    pub fn new(metrics: Metrics, conversations: Vec<Conversation>, travelers: Vec<Traveler>) -> Self {
        Self {
            metrics,
            conversations,
            travelers,
            feedback: Vec::new(),
        }
    }

    pub fn with_feedback(mut self, feedback: Vec<FeedbackItem>) -> Self {
        self.feedback = feedback;
        self
    }

    /// Checks the data model invariants. A snapshot failing any of them is
    /// never applied.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = self.metrics.first_negative() {
            return Err(ConsoleError::invalid_snapshot(format!(
                "metric '{}' is negative",
                name
            )));
        }

        let mut ids = HashSet::with_capacity(self.travelers.len());
        for traveler in &self.travelers {
            if !ids.insert(traveler.id.as_str()) {
                return Err(ConsoleError::invalid_snapshot(format!(
                    "duplicate traveler id '{}'",
                    traveler.id
                )));
            }
            if !traveler.travel_dates.is_ordered() {
                return Err(ConsoleError::invalid_snapshot(format!(
                    "traveler '{}' departs after returning",
                    traveler.id
                )));
            }
        }

        for conversation in &self.conversations {
            if !ids.contains(conversation.traveler_id.as_str()) {
                return Err(ConsoleError::invalid_snapshot(format!(
                    "conversation '{}' references unknown traveler '{}'",
                    conversation.id, conversation.traveler_id
                )));
            }
            if !sentiment::is_valid_score(conversation.sentiment_score) {
                return Err(ConsoleError::invalid_snapshot(format!(
                    "conversation '{}' has sentiment {} outside [0, 1]",
                    conversation.id, conversation.sentiment_score
                )));
            }
        }

        Ok(())
    }

    pub fn traveler(&self, id: &str) -> Option<&Traveler> {
        self.travelers.iter().find(|t| t.id == id)
    }

    pub fn contains_traveler(&self, id: &str) -> bool {
        self.traveler(id).is_some()
    }

    pub fn traveler_ids(&self) -> HashSet<&str> {
        self.travelers.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn conversations_for<'a>(
        &'a self,
        traveler_id: &'a str,
    ) -> impl Iterator<Item = &'a Conversation> + 'a {
        self.conversations
            .iter()
            .filter(move |c| c.traveler_id == traveler_id)
    }

    pub fn conversation_summary(&self) -> ConversationSummary {
        let mut summary = ConversationSummary::default();
        for conversation in &self.conversations {
            *summary
                .by_status
                .entry(conversation.status.to_string())
                .or_default() += 1;
            *summary
                .by_priority
                .entry(conversation.priority.to_string())
                .or_default() += 1;
            if conversation.needs_attention() {
                summary.needing_attention += 1;
            }
        }
        summary
    }

    pub fn count_with_status(&self, status: ConversationStatus) -> usize {
        self.conversations.iter().filter(|c| c.status == status).count()
    }

    pub fn count_with_priority(&self, priority: Priority) -> usize {
        self.conversations
            .iter()
            .filter(|c| c.priority == priority)
            .count()
    }

    pub fn feedback_stats(&self) -> FeedbackStats {
        FeedbackStats::from_items(&self.feedback)
    }
}
