//! Configuration service implementation.
//!
//! Loads `ConsoleConfig` from an explicit path or from
//! `~/.config/concierge/config.toml`, then applies environment overrides.

use std::path::{Path, PathBuf};

use concierge_core::config::ConsoleConfig;
use concierge_core::error::{ConsoleError, Result};

use crate::paths::ConciergePaths;

/// Overrides `backend.url`.
pub const ENV_BACKEND_URL: &str = "CONCIERGE_BACKEND_URL";
/// Overrides `backend.anon_key`.
pub const ENV_ANON_KEY: &str = "CONCIERGE_ANON_KEY";

/// Resolves and parses the console configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    /// Explicit config file; `None` means the platform default.
    path: Option<PathBuf>,
}

impl ConfigService {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// The file this service reads.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => ConciergePaths::config_file().map_err(|e| ConsoleError::config(e.to_string())),
        }
    }

    /// Loads, overrides and validates the configuration.
    ///
    /// A missing file yields the defaults (fixture backend). A file that
    /// exists but does not parse is an error.
    pub fn load(&self) -> Result<ConsoleConfig> {
        let path = self.config_path()?;
        let config = Self::read_file(&path)?;
        let config = apply_overrides(config, |key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConsoleConfig> {
        if !path.exists() {
            tracing::debug!("[ConfigService] {} not found, using defaults", path.display());
            return Ok(ConsoleConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ConsoleConfig = toml::from_str(&content)?;
        tracing::debug!("[ConfigService] Loaded {}", path.display());
        Ok(config)
    }
}

/// Applies `CONCIERGE_*` overrides read through `lookup`. Empty values are
/// ignored.
pub fn apply_overrides(
    mut config: ConsoleConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ConsoleConfig {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(url) = non_empty(ENV_BACKEND_URL) {
        config.backend.url = Some(url);
    }
    if let Some(key) = non_empty(ENV_ANON_KEY) {
        config.backend.anon_key = Some(key);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::config::BackendKind;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(dir.path().join("absent.toml")));

        let config = ConfigService::read_file(&service.config_path().unwrap()).unwrap();

        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn reads_supabase_backend() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[backend]
kind = "supabase"
url = "https://project.supabase.co"
anon_key = "anon"
request_timeout_secs = 5

[logging]
level = "debug"
json = true
"#,
        );

        let config = ConfigService::read_file(&path).unwrap();

        assert_eq!(config.backend.kind, BackendKind::Supabase);
        assert_eq!(config.backend.request_timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[backend\nkind = ");

        let err = ConfigService::read_file(&path).unwrap_err();

        assert!(matches!(err, ConsoleError::Serialization { .. }));
    }

    #[test]
    fn environment_overrides_file_values() {
        let env = HashMap::from([
            (ENV_BACKEND_URL, "https://override.example"),
            (ENV_ANON_KEY, ""),
        ]);
        let mut config = ConsoleConfig::default();
        config.backend.anon_key = Some("from-file".to_string());

        let config = apply_overrides(config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.url.as_deref(), Some("https://override.example"));
        assert_eq!(config.backend.anon_key.as_deref(), Some("from-file"));
    }
}
