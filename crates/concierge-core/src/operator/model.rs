//! Operator domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Display name used when the auth identity carries no profile.
pub const DEFAULT_OPERATOR_NAME: &str = "Admin User";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OperatorRole {
    #[default]
    Admin,
    Agent,
}

/// The signed-in user of the console.
///
/// Exactly zero or one operator is active at a time. It is created by a
/// successful sign-in and dropped on sign-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub id: String,
    pub email: String,
    pub role: OperatorRole,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Operator {
    pub fn is_admin(&self) -> bool {
        self.role == OperatorRole::Admin
    }
}
