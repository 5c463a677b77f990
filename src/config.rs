//! Configuration management and validation.
//!
//! Provides the data-source and refresh settings, loaded from a TOML file with
//! credentials overridable from the environment. The sheet layout itself is not
//! configurable; it lives in [`crate::constants`].

use crate::constants::{
    API_KEY_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_SHEET_RANGE, DEFAULT_SHEETS_BASE_URL,
    MIN_REFRESH_INTERVAL_SECS, SHEET_ID_ENV,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Where and how the raw results table is fetched
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// API key for the spreadsheet service
    pub api_key: String,

    /// Spreadsheet identifier
    pub sheet_id: String,

    /// A1 range of the results sheet
    pub range: String,

    /// Base URL of the values endpoint
    pub base_url: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            sheet_id: String::new(),
            range: DEFAULT_SHEET_RANGE.to_string(),
            base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

// The API key never reaches logs
impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("sheet_id", &self.sheet_id)
            .field("range", &self.range)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SourceConfig {
    /// Check that credentials are present and values are usable
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration(format!(
                "Missing API key (set source.api_key or {})",
                API_KEY_ENV
            )));
        }
        if self.sheet_id.trim().is_empty() {
            return Err(Error::configuration(format!(
                "Missing sheet id (set source.sheet_id or {})",
                SHEET_ID_ENV
            )));
        }
        if self.range.trim().is_empty() {
            return Err(Error::configuration("Sheet range must not be empty"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::configuration(format!(
                "Base URL must be http(s): {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::configuration("Fetch timeout must be at least 1 second"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Periodic refresh settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between refreshes in watch mode
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl RefreshConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs < MIN_REFRESH_INTERVAL_SECS {
            return Err(Error::configuration(format!(
                "Refresh interval {}s is below the minimum of {}s",
                self.interval_secs, MIN_REFRESH_INTERVAL_SECS
            )));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Main configuration for the leaderboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub refresh: RefreshConfig,
}

impl Config {
    /// Default configuration file location under the user config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid configuration: {}", e)))
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration and apply environment overrides
    ///
    /// An explicit path must exist. Without one, the default location is used when
    /// present and built-in defaults otherwise. Nothing is validated here; callers
    /// validate the parts they need.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(default) => {
                    debug!("Loading configuration from {}", default.display());
                    Self::from_file(&default)?
                }
                None => {
                    debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };

        Ok(config.with_overrides(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(SHEET_ID_ENV).ok(),
        ))
    }

    /// Replace credentials with non-empty override values
    pub fn with_overrides(mut self, api_key: Option<String>, sheet_id: Option<String>) -> Self {
        if let Some(api_key) = api_key.filter(|v| !v.trim().is_empty()) {
            self.source.api_key = api_key;
        }
        if let Some(sheet_id) = sheet_id.filter(|v| !v.trim().is_empty()) {
            self.source.sheet_id = sheet_id;
        }
        self
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        self.refresh.validate()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.source.api_key = api_key.into();
        self
    }

    pub fn with_sheet_id(mut self, sheet_id: impl Into<String>) -> Self {
        self.source.sheet_id = sheet_id.into();
        self
    }

    /// Set the A1 range of the results sheet
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.source.range = range.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.source.base_url = base_url.into();
        self
    }

    /// Set the refresh interval in seconds
    pub fn with_refresh_interval(mut self, interval_secs: u64) -> Self {
        self.refresh.interval_secs = interval_secs;
        self
    }
}
