//! Feedback center domain models.

mod model;

pub use model::{FeedbackItem, FeedbackKind, FeedbackStats, FeedbackStatus};
