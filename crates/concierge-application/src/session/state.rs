use concierge_core::operator::Operator;
use serde::{Deserialize, Serialize};

/// Sign-in state of the console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "operator", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(Operator),
}

impl SessionState {
    pub fn operator(&self) -> Option<&Operator> {
        match self {
            Self::SignedIn(operator) => Some(operator),
            Self::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}
