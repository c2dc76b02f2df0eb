//! Wire shapes for the auth and REST endpoints.
//!
//! Table rows for travelers, conversations, metrics and feedback deserialize
//! straight into the core models; only auth and the outbound insert need
//! their own types.

use concierge_core::message::{MessageMode, OutgoingMessage};
use concierge_core::operator::{AuthIdentity, OperatorRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub user: UserDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserDto {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Profile fields an operator account may carry. All optional.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserMetadata {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserDto {
    /// `email` is the address used for the grant, in case the user record
    /// omits it.
    pub fn into_identity(self, email: &str) -> AuthIdentity {
        let mut identity = AuthIdentity::new(self.id, self.email.unwrap_or_else(|| email.to_string()));
        identity.role = self
            .user_metadata
            .role
            .and_then(|role| role.parse::<OperatorRole>().ok());
        identity.display_name = self.user_metadata.full_name;
        identity.avatar_url = self.user_metadata.avatar_url;
        identity
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OutboundMessageRow<'a> {
    pub mode: MessageMode,
    pub recipients: &'a [String],
    pub body: &'a str,
}

impl<'a> From<&'a OutgoingMessage> for OutboundMessageRow<'a> {
    fn from(message: &'a OutgoingMessage) -> Self {
        Self {
            mode: message.mode,
            recipients: &message.recipients,
            body: &message.body,
        }
    }
}

/// Row echoed back by an insert with `Prefer: return=representation`.
#[derive(Debug, Deserialize)]
pub(crate) struct InsertedRow {
    pub id: serde_json::Value,
}

impl InsertedRow {
    /// Ids may be uuids or serial integers.
    pub fn id_string(&self) -> Option<String> {
        match &self.id {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}
