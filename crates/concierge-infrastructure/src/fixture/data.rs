use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use concierge_core::conversation::{Conversation, ConversationStatus, Priority};
use concierge_core::dashboard::{DashboardSnapshot, DataProvider};
use concierge_core::error::Result;
use concierge_core::feedback::{FeedbackItem, FeedbackKind, FeedbackStatus};
use concierge_core::metrics::Metrics;
use concierge_core::traveler::{TravelDates, Traveler, TravelerStatus};

/// Serves a fixed snapshot, optionally after a simulated network delay.
pub struct FixtureDataProvider {
    snapshot: DashboardSnapshot,
    latency: Option<Duration>,
}

impl FixtureDataProvider {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self {
            snapshot,
            latency: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

impl Default for FixtureDataProvider {
    fn default() -> Self {
        Self::new(demo_snapshot())
    }
}

#[async_trait]
impl DataProvider for FixtureDataProvider {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        tracing::debug!(
            "[FixtureData] Serving {} travelers, {} conversations",
            self.snapshot.travelers.len(),
            self.snapshot.conversations.len()
        );
        Ok(self.snapshot.clone())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn preferences(communication: &str, language: &str) -> BTreeMap<String, serde_json::Value> {
    BTreeMap::from([
        ("communication".to_string(), communication.into()),
        ("language".to_string(), language.into()),
    ])
}

fn demo_travelers() -> Vec<Traveler> {
    let now = Utc::now();
    vec![
        Traveler {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            booking_reference: "MW-2024-001".to_string(),
            destination: "Tokyo, Japan".to_string(),
            travel_dates: TravelDates::new(date(2024, 1, 15), date(2024, 1, 22)),
            status: TravelerStatus::Traveling,
            preferences: preferences("email", "en"),
            created_at: Some(now),
            updated_at: Some(now),
        },
        Traveler {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            email: "michael.chen@email.com".to_string(),
            phone: Some("+1 (555) 987-6543".to_string()),
            booking_reference: "MW-2024-002".to_string(),
            destination: "Barcelona, Spain".to_string(),
            travel_dates: TravelDates::new(date(2024, 1, 20), date(2024, 1, 28)),
            status: TravelerStatus::PreDeparture,
            preferences: preferences("sms", "en"),
            created_at: Some(now),
            updated_at: Some(now),
        },
    ]
}

fn demo_conversations() -> Vec<Conversation> {
    let now = Utc::now();
    vec![
        Conversation {
            id: "1".to_string(),
            traveler_id: "1".to_string(),
            agent_id: None,
            status: ConversationStatus::Active,
            priority: Priority::Medium,
            sentiment_score: 0.8,
            last_activity_at: now,
        },
        Conversation {
            id: "2".to_string(),
            traveler_id: "2".to_string(),
            agent_id: None,
            status: ConversationStatus::Escalated,
            priority: Priority::High,
            sentiment_score: 0.2,
            last_activity_at: now,
        },
    ]
}

fn demo_feedback() -> Vec<FeedbackItem> {
    let now = Utc::now();
    let item = |id: &str,
                kind: FeedbackKind,
                traveler: &str,
                destination: &str,
                subject: &str,
                content: &str,
                priority: Priority,
                status: FeedbackStatus,
                sentiment: f64| FeedbackItem {
        id: id.to_string(),
        kind,
        traveler: traveler.to_string(),
        destination: destination.to_string(),
        subject: subject.to_string(),
        content: content.to_string(),
        priority,
        status,
        created_at: now,
        sentiment,
    };

    vec![
        item(
            "1",
            FeedbackKind::Complaint,
            "Sarah Johnson",
            "Tokyo, Japan",
            "Hotel room not as described",
            "The room was much smaller than advertised and the view was blocked.",
            Priority::High,
            FeedbackStatus::Open,
            0.2,
        ),
        item(
            "2",
            FeedbackKind::Suggestion,
            "Michael Chen",
            "Barcelona, Spain",
            "Add more restaurant recommendations",
            "It would be great to get more local restaurant tips in the itinerary.",
            Priority::Medium,
            FeedbackStatus::InProgress,
            0.7,
        ),
        item(
            "3",
            FeedbackKind::Ticket,
            "Emma Wilson",
            "Paris, France",
            "Flight delay compensation",
            "My flight was delayed by six hours. How do I claim compensation?",
            Priority::Urgent,
            FeedbackStatus::Open,
            0.3,
        ),
    ]
}

/// The demo dashboard: two travelers, two conversations, three feedback items.
pub fn demo_snapshot() -> DashboardSnapshot {
    let metrics = Metrics {
        active_conversations: 127,
        avg_response_time: 2.3,
        satisfaction_score: 4.7,
        resolution_rate: 94.2,
        daily_interactions: 1834,
        escalation_rate: 5.8,
    };

    DashboardSnapshot::new(metrics, demo_conversations(), demo_travelers())
        .with_feedback(demo_feedback())
}
