//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use super::args::CliArgs;
use super::locale;
use super::storage::ConfigError;
use crate::domain::entities::ApiKey;
use crate::infrastructure::api::{IMAGE_BASE_URL, NOW_PLAYING_URL};

pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "linuxmobile";
pub(super) const APP_NAME: &str = "cinematime";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const CACHE_FILE_NAME: &str = "now_playing.json";

/// Log level configuration. Its `Display` form is a valid `EnvFilter` directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Settings read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// TMDB API key. Usually supplied through `TMDB_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<ApiKey>,

    /// Now-playing endpoint.
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Base URL poster paths are appended to.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// TMDB language tag, e.g. `de-DE`. Derived from the locale when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Cache snapshot file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_path: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
}

fn default_catalog_url() -> String {
    NOW_PLAYING_URL.to_string()
}

fn default_image_base_url() -> String {
    IMAGE_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(api_key) = &args.api_key {
            self.api_key = Some(api_key.clone());
        }
        if let Some(catalog_url) = &args.catalog_url {
            self.catalog_url = catalog_url.clone();
        }
        if let Some(image_base_url) = &args.image_base_url {
            self.image_base_url = image_base_url.clone();
        }
        if let Some(language) = &args.language {
            self.language = Some(language.clone());
        }
        if let Some(cache_path) = &args.cache_path {
            self.cache_path = Some(cache_path.clone());
        }
        if let Some(timeout) = args.timeout {
            self.request_timeout_secs = timeout;
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default cache file path.
    #[must_use]
    pub fn default_cache_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.cache_dir().join(CACHE_FILE_NAME))
    }

    /// Returns effective cache path. `None` means keep the cache in memory.
    #[must_use]
    pub fn effective_cache_path(&self) -> Option<PathBuf> {
        self.cache_path.clone().or_else(Self::default_cache_path)
    }

    /// Returns the configured language, or one derived from `LANG`.
    #[must_use]
    pub fn effective_language(&self) -> String {
        self.language
            .clone()
            .or_else(|| std::env::var("LANG").ok().and_then(|l| locale::tmdb_language_tag(&l)))
            .unwrap_or_else(|| locale::DEFAULT_LANGUAGE.to_string())
    }

    /// Catalog URL for one page in the effective language.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `catalog_url` does not parse.
    pub fn now_playing_url(&self, page: u32) -> Result<Url, ConfigError> {
        let mut url = parse_url("catalog_url", &self.catalog_url)?;
        url.query_pairs_mut()
            .append_pair("language", &self.effective_language())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    /// Parsed poster base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `image_base_url` does not parse.
    pub fn image_base(&self) -> Result<Url, ConfigError> {
        parse_url("image_base_url", &self.image_base_url)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { field, source })
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            api_key: None,
            catalog_url: default_catalog_url(),
            image_base_url: default_image_base_url(),
            language: None,
            cache_path: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_path: None,
        }
    }
}
