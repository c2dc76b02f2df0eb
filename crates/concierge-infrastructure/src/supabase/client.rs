use std::time::Duration;

use async_trait::async_trait;
use concierge_core::config::BackendConfig;
use concierge_core::conversation::Conversation;
use concierge_core::dashboard::{DashboardSnapshot, DataProvider};
use concierge_core::error::{ConsoleError, Result};
use concierge_core::feedback::FeedbackItem;
use concierge_core::message::{MessageTransport, OutgoingMessage, TransportAck};
use concierge_core::metrics::Metrics;
use concierge_core::operator::{AuthIdentity, AuthProvider};
use concierge_core::traveler::Traveler;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use super::dto::{InsertedRow, OutboundMessageRow, PasswordGrantRequest, TokenResponse};
use super::error::SupabaseError;

pub const TRAVELERS_TABLE: &str = "travelers";
pub const CONVERSATIONS_TABLE: &str = "ai_conversations";
pub const METRICS_TABLE: &str = "ai_metrics";
pub const FEEDBACK_TABLE: &str = "feedback";
pub const OUTBOUND_TABLE: &str = "outbound_messages";

/// REST client for a Supabase project.
///
/// Requests carry the anon key as `apikey`, and as bearer token until an
/// operator signs in; after that the operator's access token is used.
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
    timeout: Duration,
    access_token: RwLock<Option<String>>,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            timeout,
            access_token: RwLock::new(None),
        }
    }

    /// Builds a client from `[backend]`.
    ///
    /// # Errors
    ///
    /// `ConsoleError::Config` when the url or anon key is missing.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| SupabaseError::Config("backend.url is not set".to_string()));
        let anon_key = config
            .anon_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SupabaseError::Config("backend.anon_key is not set".to_string()));

        match (url, anon_key) {
            (Ok(url), Ok(anon_key)) => Ok(Self::new(
                url,
                anon_key,
                Duration::from_secs(config.request_timeout_secs),
            )),
            (Err(e), _) | (_, Err(e)) => Err(ConsoleError::config(e.to_string())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Adds the api key, the bearer token and the request timeout.
    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.access_token.read().await.clone();
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(token.as_deref().unwrap_or(&self.anon_key))
            .timeout(self.timeout)
    }

    async fn ensure_success(response: Response) -> std::result::Result<Response, SupabaseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(SupabaseError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<Vec<T>, SupabaseError> {
        let request = self
            .authorize(self.client.get(self.rest_url(table)).query(query))
            .await;
        let response = Self::ensure_success(request.send().await?).await?;
        let rows: Vec<T> = response.json().await?;
        tracing::debug!("[Supabase] {} returned {} row(s)", table, rows.len());
        Ok(rows)
    }

    async fn password_grant(
        &self,
        email: &str,
        password: &str,
    ) -> std::result::Result<AuthIdentity, SupabaseError> {
        let request = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .timeout(self.timeout)
            .json(&PasswordGrantRequest { email, password });

        let response = Self::ensure_success(request.send().await?).await?;
        let token: TokenResponse = response.json().await?;
        *self.access_token.write().await = Some(token.access_token);
        Ok(token.user.into_identity(email))
    }

    async fn logout(&self) -> std::result::Result<(), SupabaseError> {
        let Some(token) = self.access_token.write().await.take() else {
            return Ok(());
        };
        let request = self
            .client
            .post(self.auth_url("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .timeout(self.timeout);
        Self::ensure_success(request.send().await?).await?;
        Ok(())
    }

    async fn fetch_all(&self) -> std::result::Result<DashboardSnapshot, SupabaseError> {
        let (metrics, conversations, travelers, feedback) = tokio::try_join!(
            self.select::<Metrics>(
                METRICS_TABLE,
                &[("select", "*"), ("order", "created_at.desc"), ("limit", "1")],
            ),
            self.select::<Conversation>(
                CONVERSATIONS_TABLE,
                &[("select", "*"), ("order", "last_message_at.desc")],
            ),
            self.select::<Traveler>(TRAVELERS_TABLE, &[("select", "*"), ("order", "name")]),
            self.select::<FeedbackItem>(
                FEEDBACK_TABLE,
                &[("select", "*"), ("order", "created_at.desc")],
            ),
        )?;

        let metrics = metrics
            .into_iter()
            .next()
            .ok_or(SupabaseError::EmptyTable(METRICS_TABLE))?;

        Ok(DashboardSnapshot::new(metrics, conversations, travelers).with_feedback(feedback))
    }

    async fn insert_outbound(
        &self,
        message: &OutgoingMessage,
    ) -> std::result::Result<TransportAck, SupabaseError> {
        let request = self
            .authorize(
                self.client
                    .post(self.rest_url(OUTBOUND_TABLE))
                    .header("Prefer", "return=representation")
                    .json(&OutboundMessageRow::from(message)),
            )
            .await;
        let response = Self::ensure_success(request.send().await?).await?;
        let rows: Vec<InsertedRow> = response.json().await?;
        Ok(TransportAck {
            message_id: rows.first().and_then(InsertedRow::id_string),
        })
    }
}

#[async_trait]
impl AuthProvider for SupabaseClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthIdentity> {
        self.password_grant(email, password).await.map_err(|e| {
            tracing::warn!("[Supabase] Password grant failed: {}", e);
            ConsoleError::auth(e.to_string())
        })
    }

    async fn sign_out(&self) -> Result<()> {
        self.logout()
            .await
            .map_err(|e| ConsoleError::auth(e.to_string()))
    }
}

#[async_trait]
impl DataProvider for SupabaseClient {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot> {
        self.fetch_all()
            .await
            .map_err(|e| ConsoleError::data_load(e.to_string()))
    }
}

#[async_trait]
impl MessageTransport for SupabaseClient {
    async fn send(&self, message: &OutgoingMessage) -> Result<TransportAck> {
        self.insert_outbound(message)
            .await
            .map_err(|e| ConsoleError::transport(e.to_string()))
    }
}
