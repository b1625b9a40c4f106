//! Client configuration management.
//!
//! Handles loading, saving, and accessing the client configuration: the API
//! secret, REST transport settings, and logging preferences. Configuration
//! is persisted as TOML on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::constants;
use crate::error::{RwError, RwResult};
use crate::platform;

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rewrite API secret used as the Bearer token.
    #[serde(default)]
    pub secret: String,

    /// REST transport settings.
    #[serde(default)]
    pub rest: RestConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    /// API origin. Empty means the canonical Rewrite origin.
    #[serde(default)]
    pub base_url: String,

    /// Default request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Maximum retries for retryable statuses.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_timeout_ms() -> u64 {
    constants::DEFAULT_TIMEOUT.as_millis() as u64
}

fn default_max_retries() -> u32 {
    constants::DEFAULT_MAX_RETRIES
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: default_timeout_ms(),
            headers: HashMap::new(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> RwResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> RwResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default config file path.
    pub fn save_default(&self) -> RwResult<()> {
        let path = Self::default_config_path()?;
        self.save_to_file(&path)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> RwResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| RwError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> RwResult<PathBuf> {
        let config_dir = platform::config_dir()?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> RwResult<PathBuf> {
        if self.logging.directory.is_empty() {
            let data_dir = platform::data_dir()?;
            Ok(data_dir.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Check whether a secret is configured.
    pub fn is_configured(&self) -> bool {
        !self.secret.trim().is_empty()
    }

    /// Sanitize and normalize an API base URL.
    ///
    /// Strips surrounding whitespace and quotes, adds `https://` when no
    /// scheme is given, and drops trailing slashes. The `/v1` segment is
    /// left alone; the URL builder deduplicates it.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}

/// Thread-safe configuration holder for shared access across tasks.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<AppConfig>>,
    path: Option<PathBuf>,
}

impl ConfigHandle {
    /// Create a new configuration handle backed by the default path.
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path: None,
        }
    }

    /// Create a handle that saves back to a specific file.
    pub fn with_path(config: AppConfig, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path: Some(path),
        }
    }

    /// Read the configuration.
    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, AppConfig> {
        self.inner.read().await
    }

    /// Write/update the configuration.
    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, AppConfig> {
        self.inner.write().await
    }

    /// Path the configuration is saved to.
    pub fn path(&self) -> RwResult<PathBuf> {
        match &self.path {
            Some(p) => Ok(p.clone()),
            None => AppConfig::default_config_path(),
        }
    }

    /// Save the current configuration to disk.
    pub async fn save(&self) -> RwResult<()> {
        let path = self.path()?;
        let config = self.inner.read().await;
        config.save_to_file(&path)
    }
}
