//! Domain models, collaborator traits and errors for the Concierge console.

pub mod config;
pub mod conversation;
pub mod dashboard;
pub mod error;
pub mod feedback;
pub mod message;
pub mod metrics;
pub mod operator;
pub mod quick_action;
pub mod sentiment;
pub mod traveler;
pub mod view;

// Re-export common error type
pub use error::{ConsoleError, Result, ValidationError};
