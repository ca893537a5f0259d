//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or unreadable config file is never fatal: it is logged and the
//! lower-priority sources are used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Environment variable overriding the recipe data file
pub const ENV_DATA_FILE: &str = "NOODLEHUB_DATA_FILE";
/// Environment variable overriding the HTTP bind address
pub const ENV_BIND_ADDR: &str = "NOODLEHUB_BIND";

/// On-disk configuration (`config.toml`)
///
/// Every field is optional so partial files are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Path to the recipes JSON file
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// `host:port` to listen on
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Re-read the data file on every request instead of caching it
    #[serde(default)]
    pub reload_per_request: Option<bool>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging section of `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive ("info", "noodlehub_web=debug", ...)
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

fn default_log_level() -> String {
    "info".to_string()
}

/// Built-in fallback values
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub data_file: PathBuf,
    pub bind_addr: String,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn get() -> Self {
        Self {
            data_file: PathBuf::from("data/recipes.json"),
            bind_addr: "127.0.0.1:5780".to_string(),
            log_level: default_log_level(),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub bind_addr: Option<String>,
    /// `--reload`; only ever turns reloading on
    pub reload_per_request: bool,
    /// Explicit config file; replaces the platform default location
    pub config_file: Option<PathBuf>,
}

/// Fully resolved service settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub data_file: PathBuf,
    pub bind_addr: String,
    pub reload_per_request: bool,
    pub log_level: String,
    /// Config file that was read, if any
    pub config_file: Option<PathBuf>,
}

/// Merges CLI, environment, TOML file and compiled defaults
pub struct ConfigResolver {
    cli: CliOverrides,
}

impl ConfigResolver {
    pub fn new(cli: CliOverrides) -> Self {
        Self { cli }
    }

    /// Resolve every setting; never fails
    pub fn resolve(&self) -> ServiceConfig {
        let (toml, config_file) = self.load_toml();
        let defaults = CompiledDefaults::get();

        let data_file = self
            .cli
            .data_file
            .clone()
            .or_else(|| env_non_empty(ENV_DATA_FILE).map(PathBuf::from))
            .or(toml.data_file)
            .unwrap_or(defaults.data_file);

        let bind_addr = self
            .cli
            .bind_addr
            .clone()
            .or_else(|| env_non_empty(ENV_BIND_ADDR))
            .or(toml.bind_addr)
            .unwrap_or(defaults.bind_addr);

        let reload_per_request =
            self.cli.reload_per_request || toml.reload_per_request.unwrap_or(false);

        ServiceConfig {
            data_file,
            bind_addr,
            reload_per_request,
            log_level: toml.logging.level,
            config_file,
        }
    }

    fn load_toml(&self) -> (TomlConfig, Option<PathBuf>) {
        let path = match self.cli.config_file.clone().or_else(default_config_path) {
            Some(path) => path,
            None => return (TomlConfig::default(), None),
        };

        // The platform default is optional; an explicit path is expected to exist
        if self.cli.config_file.is_none() && !path.exists() {
            debug!("No config file at {}", path.display());
            return (TomlConfig::default(), None);
        }

        match load_toml_config(&path) {
            Ok(config) => {
                debug!("Loaded config file {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                (TomlConfig::default(), None)
            }
        }
    }
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Platform config location: `<config dir>/noodlehub/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("noodlehub").join("config.toml"))
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
