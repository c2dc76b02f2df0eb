//! Aggregate AI metrics shown on the dashboard.

use serde::{Deserialize, Serialize};

/// Fixed set of dashboard aggregates. Opaque to the console beyond display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub active_conversations: u64,
    /// Seconds.
    pub avg_response_time: f64,
    pub satisfaction_score: f64,
    /// Percentage.
    #[serde(rename = "issue_resolution_rate")]
    pub resolution_rate: f64,
    #[serde(rename = "today_interactions")]
    pub daily_interactions: u64,
    /// Percentage.
    pub escalation_rate: f64,
}

impl Metrics {
    /// Name of the first negative (or NaN) aggregate, if any.
    pub fn first_negative(&self) -> Option<&'static str> {
        [
            ("avg_response_time", self.avg_response_time),
            ("satisfaction_score", self.satisfaction_score),
            ("resolution_rate", self.resolution_rate),
            ("escalation_rate", self.escalation_rate),
        ]
        .into_iter()
        .find(|(_, value)| !(*value >= 0.0))
        .map(|(name, _)| name)
    }
}
