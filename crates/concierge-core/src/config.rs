//! Console configuration model.

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// In-memory demo data and credentials.
    #[default]
    Fixture,
    /// Supabase-style REST backend.
    Supabase,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub anon_key: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    15
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            url: None,
            anon_key: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConsoleConfig {
    /// Rejects combinations the infrastructure layer cannot wire up.
    pub fn validate(&self) -> Result<()> {
        if self.backend.kind == BackendKind::Supabase {
            if self.backend.url.as_deref().is_none_or(str::is_empty) {
                return Err(ConsoleError::config("backend.url is required for supabase"));
            }
            if self.backend.anon_key.as_deref().is_none_or(str::is_empty) {
                return Err(ConsoleError::config(
                    "backend.anon_key is required for supabase",
                ));
            }
        }
        if self.backend.request_timeout_secs == 0 {
            return Err(ConsoleError::config(
                "backend.request_timeout_secs must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: ConsoleConfig = toml::from_str("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.backend.request_timeout_secs, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn supabase_requires_url_and_key() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            [backend]
            kind = "supabase"
            url = "https://demo.supabase.co"
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("anon_key"));
    }

    #[test]
    fn parses_logging_section() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            [logging]
            level = "debug"
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }
}
