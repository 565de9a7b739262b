//! Configuration loading and resolution
//!
//! Every setting is resolved in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default listen port
pub const DEFAULT_PORT: u16 = 4000;
/// Default listen address (all interfaces)
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// Default tracing level
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const PORT_ENV: &str = "PORT";
pub const BIND_ENV: &str = "ALBUMS_BIND";
pub const SEED_ENV: &str = "ALBUMS_SEED";
pub const LOG_LEVEL_ENV: &str = "ALBUMS_LOG_LEVEL";
pub const CONFIG_FILE_ENV: &str = "ALBUMS_CONFIG";

/// Contents of the optional TOML config file. All keys are optional.
///
/// ```toml
/// bind_address = "127.0.0.1"
/// port = 4000
/// seed_file = "albums.json"
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub seed_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Read and parse a config file. A missing file is an error because
    /// the caller named it explicitly.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub seed_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve the configuration from CLI overrides, the environment and
    /// the config file (if one is named by `--config` or `ALBUMS_CONFIG`).
    pub fn resolve(cli: &ConfigOverrides) -> Result<Self> {
        let config_path = cli
            .config_file
            .clone()
            .or_else(|| env_var(CONFIG_FILE_ENV).map(PathBuf::from));

        let file = match config_path {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                TomlConfig::load(&path)?
            }
            None => TomlConfig::default(),
        };

        let env_port = match env_var(PORT_ENV) {
            Some(raw) => Some(raw.parse::<u16>().map_err(|_| {
                Error::Config(format!("{} must be a port number, got {:?}", PORT_ENV, raw))
            })?),
            None => None,
        };

        let defaults = Self::default();

        Ok(Self {
            bind_address: cli
                .bind_address
                .clone()
                .or_else(|| env_var(BIND_ENV))
                .or(file.bind_address)
                .unwrap_or(defaults.bind_address),
            port: cli.port.or(env_port).or(file.port).unwrap_or(defaults.port),
            seed_file: cli
                .seed_file
                .clone()
                .or_else(|| env_var(SEED_ENV).map(PathBuf::from))
                .or(file.seed_file),
            log_level: cli
                .log_level
                .clone()
                .or_else(|| env_var(LOG_LEVEL_ENV))
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
        })
    }

    /// Socket address to bind the HTTP listener to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            Error::Config(format!("Invalid bind address: {}", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Environment lookup treating empty values as unset
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
