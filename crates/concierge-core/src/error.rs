//! Error types for the Concierge console.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a local guard refuses an operation before any collaborator is called.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Sign-in was attempted with an empty email or password.
    #[error("email and password are required")]
    MissingCredentials,

    /// The draft body is empty after trimming.
    #[error("message body is empty")]
    EmptyBody,

    /// Manual mode without a chosen recipient.
    #[error("no recipient selected")]
    MissingRecipient,

    /// Bulk mode with an empty cohort.
    #[error("no travelers selected")]
    EmptySelection,

    /// Another dispatch has not settled yet.
    #[error("a message is already being sent")]
    DispatchInFlight,
}

/// A shared error type for the entire console.
///
/// Every failure the core can produce is recoverable by a later operator
/// action, so none of these variants is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConsoleError {
    /// Bad credentials or an unreachable auth provider.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The data provider failed or returned a partial result.
    #[error("Dashboard data load failed: {0}")]
    DataLoad(String),

    /// A fetched snapshot broke one of the data model invariants.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// A local guard refused the operation; no collaborator was called.
    #[error("Rejected: {0}")]
    Validation(ValidationError),

    /// The transport rejected or timed out; the draft is kept.
    #[error("Message transport failed: {0}")]
    DispatchTransport(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConsoleError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn data_load(message: impl Into<String>) -> Self {
        Self::DataLoad(message.into())
    }

    pub fn invalid_snapshot(message: impl Into<String>) -> Self {
        Self::InvalidSnapshot(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::DispatchTransport(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// True for both provider failures and rejected snapshots.
    pub fn is_data_load(&self) -> bool {
        matches!(self, Self::DataLoad(_) | Self::InvalidSnapshot(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::DispatchTransport(_))
    }

    /// Returns the guard that refused the operation, if any.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(reason) => Some(*reason),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<ValidationError> for ConsoleError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConsoleError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for ConsoleError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, ConsoleError>`.
pub type Result<T> = std::result::Result<T, ConsoleError>;
