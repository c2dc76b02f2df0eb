//! Auth provider trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{DEFAULT_OPERATOR_NAME, Operator, OperatorRole};
use crate::error::Result;

/// Identity returned by an auth provider after a password grant.
///
/// Providers that know nothing about operator profiles leave the optional
/// fields empty and the console falls back to an admin profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthIdentity {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<OperatorRole>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl AuthIdentity {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role: None,
            display_name: None,
            avatar_url: None,
        }
    }

    pub fn with_role(mut self, role: OperatorRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Builds the operator installed by a successful sign-in.
    pub fn into_operator(self, now: DateTime<Utc>) -> Operator {
        Operator {
            id: self.id,
            email: self.email,
            role: self.role.unwrap_or_default(),
            display_name: self
                .display_name
                .unwrap_or_else(|| DEFAULT_OPERATOR_NAME.to_string()),
            avatar_url: self.avatar_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// External authentication collaborator.
///
/// Failures carry a message for logging only; the console never branches on
/// the reason.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthIdentity>;

    async fn sign_out(&self) -> Result<()>;
}
