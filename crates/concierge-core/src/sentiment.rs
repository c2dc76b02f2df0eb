//! Sentiment scoring helpers shared by conversations and feedback.

use serde::{Deserialize, Serialize};

/// Coarse band of a sentiment score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBand {
    Positive,
    Neutral,
    Negative,
}

impl SentimentBand {
    pub const POSITIVE_THRESHOLD: f64 = 0.7;
    pub const NEUTRAL_THRESHOLD: f64 = 0.4;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::POSITIVE_THRESHOLD {
            Self::Positive
        } else if score >= Self::NEUTRAL_THRESHOLD {
            Self::Neutral
        } else {
            Self::Negative
        }
    }
}

/// Whether `score` is a usable sentiment value.
pub fn is_valid_score(score: f64) -> bool {
    (0.0..=1.0).contains(&score)
}

/// Score rendered as a whole percentage, e.g. `0.82` -> `82`.
pub fn as_percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}
