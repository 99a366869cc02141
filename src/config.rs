//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `INVENTORY_SYNC_*` environment variables, then CLI flags applied by
//! the command layer. Nested keys use `__` in environment names, e.g.
//! `INVENTORY_SYNC_CATALOG__TIMEOUT_SECS=10`.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BATCH_PATH, DEFAULT_CATALOG_BASE_URL,
    DEFAULT_DELIMITER, DEFAULT_MAX_RETRIES, DEFAULT_PRODUCTS_PATH, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_RETRY_DELAY_MS, ENV_PREFIX, QUOTE,
};
use crate::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Connection settings for the catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Scheme, host and port of the catalog service
    pub base_url: String,

    /// Batch-create endpoint path
    pub batch_path: String,

    /// Product list endpoint path, used by exports
    pub products_path: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Extra attempts after a transport failure (0 = single attempt).
    /// Batch sends retry only failures to connect.
    pub max_retries: u32,

    /// Pause between attempts in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            batch_path: DEFAULT_BATCH_PATH.to_string(),
            products_path: DEFAULT_PRODUCTS_PATH.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

impl CatalogConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Full URL of the batch-create endpoint
    pub fn batch_url(&self) -> String {
        self.endpoint(&self.batch_path)
    }

    /// Full URL of the product list endpoint
    pub fn products_url(&self) -> String {
        self.endpoint(&self.products_path)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration(format!("Invalid catalog base_url '{}': {}", self.base_url, e))
        })?;

        for (name, path) in [
            ("batch_path", &self.batch_path),
            ("products_path", &self.products_path),
        ] {
            if !path.starts_with('/') {
                return Err(Error::configuration(format!(
                    "Catalog {} must start with '/', got '{}'",
                    name, path
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(Error::configuration(
                "Catalog timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}

/// Settings for reading inventory exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field delimiter
    pub delimiter: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == QUOTE || self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::configuration(format!(
                "Delimiter {:?} cannot be a quote or line break",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// Top-level configuration for inventory sync
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub parser: ParserConfig,
}

impl Config {
    /// Default config file location, `<config dir>/inventory-sync/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load defaults, then the TOML file (if given), then the environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!("Merging config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| Error::configuration(e.to_string()))?;

        Ok(config)
    }

    /// Override the catalog base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.catalog.base_url = base_url.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.catalog.timeout_secs = timeout_secs;
        self
    }

    /// Override the transport retry count
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.catalog.max_retries = max_retries;
        self
    }

    /// Override the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.parser.delimiter = delimiter;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.parser.validate()
    }
}
