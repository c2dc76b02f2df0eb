use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use concierge_core::conversation::Conversation;
use concierge_core::dashboard::ConversationSummary;
use concierge_core::feedback::{FeedbackItem, FeedbackStats};
use concierge_core::message::DraftMessage;
use concierge_core::metrics::Metrics;
use concierge_core::operator::Operator;
use concierge_core::traveler::Traveler;
use concierge_core::view::ActiveView;
use serde::{Deserialize, Serialize};

use crate::recipient::DestinationFilter;

/// Owned copy of the whole read surface, taken under a single read lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleViewModel {
    pub operator: Option<Operator>,
    pub busy: bool,
    pub sending: bool,
    pub last_auth_error: Option<String>,
    pub last_load_error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub metrics: Option<Metrics>,
    pub conversations: Vec<Conversation>,
    pub conversation_summary: ConversationSummary,
    pub travelers: Vec<Traveler>,
    pub filtered_travelers: Vec<Traveler>,
    pub destinations: BTreeSet<String>,
    pub search: String,
    pub destination_filter: DestinationFilter,
    pub selection: BTreeSet<String>,
    pub draft: DraftMessage,
    pub feedback: Vec<FeedbackItem>,
    pub feedback_stats: FeedbackStats,
    pub active_view: ActiveView,
    pub sidebar_open: bool,
}
