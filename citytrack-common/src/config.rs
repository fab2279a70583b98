//! Bootstrap configuration loading
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Command-line and environment values are parsed by the binary; this module
//! owns the TOML layer and the final merge.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default HTTP listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default log level when neither RUST_LOG nor the TOML file set one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable naming an explicit TOML config file
pub const CONFIG_ENV_VAR: &str = "CITYTRACK_CONFIG";

/// Settings read from the TOML config file
///
/// Every field is optional; absent values fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Bind address for the HTTP server
    #[serde(default)]
    pub host: Option<String>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// JSON file replacing the built-in seed dataset
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

impl TomlConfig {
    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file; a missing file is an error
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }
}

/// TOML settings together with the file they were read from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub toml: TomlConfig,
    /// `None` when no config file was found and defaults apply
    pub source: Option<PathBuf>,
}

/// Locate and load the TOML config file
///
/// An explicitly named file (CLI argument or `env_var_name`) must exist and
/// parse. When nothing is named, the platform default locations are tried,
/// and finding no file there yields defaults rather than an error.
///
/// Runs before logging is initialized, so it reports through the returned
/// `source` instead of logging.
pub fn load_toml_config(cli_arg: Option<&Path>, env_var_name: &str) -> Result<LoadedConfig> {
    // Priority 1: Command-line argument
    // Priority 2: Environment variable
    let explicit = cli_arg.map(Path::to_path_buf).or_else(|| {
        std::env::var(env_var_name)
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    });

    // Priority 3: Platform default location
    match explicit.or_else(default_config_file) {
        Some(path) => Ok(LoadedConfig {
            toml: TomlConfig::from_file(&path)?,
            source: Some(path),
        }),
        None => Ok(LoadedConfig::default()),
    }
}

/// First existing config file among the platform default locations
fn default_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("citytrack").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/citytrack/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values supplied on the command line or via environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub seed_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// Merge overrides over the TOML file over compiled defaults
    pub fn resolve(overrides: Overrides, toml: TomlConfig) -> Result<Self> {
        let defaults = Self::default();

        let host = overrides.host.or(toml.host).unwrap_or(defaults.host);
        if host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }

        Ok(Self {
            host,
            port: overrides.port.or(toml.port).unwrap_or(defaults.port),
            seed_file: overrides.seed_file.or(toml.seed_file),
            log_level: toml.logging.level.unwrap_or(defaults.log_level),
        })
    }

    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
