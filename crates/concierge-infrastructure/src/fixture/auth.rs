use std::collections::HashMap;

use async_trait::async_trait;
use concierge_core::error::{ConsoleError, Result};
use concierge_core::operator::{AuthIdentity, AuthProvider, DEFAULT_OPERATOR_NAME, OperatorRole};

pub const DEMO_EMAIL: &str = "admin@example.com";
pub const DEMO_PASSWORD: &str = "password";

struct Account {
    password: String,
    identity: AuthIdentity,
}

/// Password auth against a fixed table of accounts.
pub struct FixtureAuthProvider {
    accounts: HashMap<String, Account>,
}

impl FixtureAuthProvider {
    /// An empty provider that rejects everyone.
    pub fn empty() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn with_account(
        mut self,
        email: impl Into<String>,
        password: impl Into<String>,
        identity: AuthIdentity,
    ) -> Self {
        self.accounts.insert(
            email.into(),
            Account {
                password: password.into(),
                identity,
            },
        );
        self
    }
}

impl Default for FixtureAuthProvider {
    /// Seeded with the demo admin account.
    fn default() -> Self {
        Self::empty().with_account(
            DEMO_EMAIL,
            DEMO_PASSWORD,
            AuthIdentity::new("fixture-admin", DEMO_EMAIL)
                .with_role(OperatorRole::Admin)
                .with_display_name(DEFAULT_OPERATOR_NAME),
        )
    }
}

#[async_trait]
impl AuthProvider for FixtureAuthProvider {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthIdentity> {
        match self.accounts.get(email) {
            Some(account) if account.password == password => {
                tracing::debug!("[FixtureAuth] Accepted {}", email);
                Ok(account.identity.clone())
            }
            _ => Err(ConsoleError::auth("invalid login credentials")),
        }
    }

    async fn sign_out(&self) -> Result<()> {
        Ok(())
    }
}
