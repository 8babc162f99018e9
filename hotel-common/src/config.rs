//! Configuration loading and config file resolution
//!
//! # Settings Sources Priority
//!
//! 1. Command-line argument (`--config`)
//! 2. Environment variable (`HOTEL_MERGER_CONFIG`)
//! 3. User config file (`<config dir>/hotel-merger/config.toml`)
//! 4. Built-in defaults (code constants)
//!
//! A missing config file never prevents startup: the caller gets built-in
//! defaults and a `ConfigSource` telling it why.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "HOTEL_MERGER_CONFIG";

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "hotel-merger";

const DEFAULT_ACME_URL: &str = "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/acme";
const DEFAULT_PATAGONIA_URL: &str =
    "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/patagonia";
const DEFAULT_PAPERFLIES_URL: &str =
    "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/paperflies";

/// Configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Supplier endpoints and HTTP settings (optional)
    #[serde(default)]
    pub suppliers: SupplierConfig,

    /// Merge tuning (optional)
    #[serde(default)]
    pub merge: MergeConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Supplier endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierConfig {
    #[serde(default = "default_acme_url")]
    pub acme_url: String,

    #[serde(default = "default_patagonia_url")]
    pub patagonia_url: String,

    #[serde(default = "default_paperflies_url")]
    pub paperflies_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupplierConfig {
    fn default() -> Self {
        Self {
            acme_url: default_acme_url(),
            patagonia_url: default_patagonia_url(),
            paperflies_url: default_paperflies_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SupplierConfig {
    /// Request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Merge tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Minimum positional-match ratio for two amenities to count as the same
    #[serde(default = "default_similarity_cutoff")]
    pub similarity_cutoff: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            similarity_cutoff: default_similarity_cutoff(),
        }
    }
}

impl MergeConfig {
    /// Cutoff clamped to 0.0-1.0 (NaN falls back to the default)
    pub fn cutoff(&self) -> f64 {
        if self.similarity_cutoff.is_nan() {
            default_similarity_cutoff()
        } else {
            self.similarity_cutoff.clamp(0.0, 1.0)
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_acme_url() -> String {
    DEFAULT_ACME_URL.to_string()
}

fn default_patagonia_url() -> String {
    DEFAULT_PATAGONIA_URL.to_string()
}

fn default_paperflies_url() -> String {
    DEFAULT_PAPERFLIES_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_similarity_cutoff() -> f64 {
    0.8
}

impl TomlConfig {
    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` argument
    CommandLine(PathBuf),
    /// `HOTEL_MERGER_CONFIG`
    Environment(PathBuf),
    /// Platform config directory
    UserConfig(PathBuf),
    /// Nothing found; built-in defaults. Carries the path that was requested
    /// but missing, if any.
    Defaults { missing: Option<PathBuf> },
}

/// Resolved configuration plus its provenance
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    pub source: ConfigSource,
}

/// Config file resolver following the documented priority order
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
    user_config_path: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver; `cli_path` is the `--config` argument if given
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self {
            cli_path,
            user_config_path: default_config_path(),
        }
    }

    /// Override the platform config location (used by tests)
    pub fn with_user_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.user_config_path = path;
        self
    }

    /// Load the effective configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if an existing file fails to parse, and
    /// `Error::Io` if an existing file cannot be read. Missing files fall
    /// back to defaults.
    pub fn load(&self) -> Result<LoadedConfig> {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_path {
            return load_explicit(path, ConfigSource::CommandLine(path.clone()));
        }

        // Priority 2: Environment variable
        if let Ok(value) = std::env::var(CONFIG_ENV_VAR) {
            if !value.trim().is_empty() {
                let path = PathBuf::from(value.trim());
                return load_explicit(&path, ConfigSource::Environment(path.clone()));
            }
        }

        // Priority 3: User config file
        if let Some(path) = &self.user_config_path {
            if path.exists() {
                return Ok(LoadedConfig {
                    config: TomlConfig::from_file(path)?,
                    source: ConfigSource::UserConfig(path.clone()),
                });
            }
        }

        // Priority 4: Built-in defaults
        Ok(LoadedConfig {
            config: TomlConfig::default(),
            source: ConfigSource::Defaults { missing: None },
        })
    }
}

fn load_explicit(path: &Path, source: ConfigSource) -> Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: TomlConfig::default(),
            source: ConfigSource::Defaults {
                missing: Some(path.to_path_buf()),
            },
        });
    }

    Ok(LoadedConfig {
        config: TomlConfig::from_file(path)?,
        source,
    })
}

/// Platform config file path (`~/.config/hotel-merger/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join("config.toml"))
}
