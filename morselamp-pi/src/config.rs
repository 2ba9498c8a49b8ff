//! Configuration loading
//!
//! Loads configuration from a TOML file or the embedded defaults.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use morselamp_core::config::{LampConfig, TimingConfig, TimingError};

/// Embedded default configuration (compiled into the binary)
pub const EMBEDDED_CONFIG: &str = include_str!("../morselamp.toml");

/// Highest BCM GPIO number on the 40-pin header
pub const MAX_BCM_PIN: u8 = 27;

/// Full application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub lamp: LampConfig,
    pub timing: TimingConfig,
}

impl AppConfig {
    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lamp.pin > MAX_BCM_PIN {
            return Err(ConfigError::InvalidPin(self.lamp.pin));
        }
        self.timing.validate().map_err(ConfigError::Timing)
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Embedded => f.write_str("embedded defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration")]
    Parse(#[from] toml::de::Error),
    #[error("lamp pin {0} is not a header GPIO (0-27)")]
    InvalidPin(u8),
    #[error("invalid timing: {0}")]
    Timing(TimingError),
}

/// Parse and validate TOML configuration
pub fn parse_config(input: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from `path`, or the embedded defaults if `None`
pub fn load(path: Option<&Path>) -> Result<(AppConfig, ConfigSource), ConfigError> {
    match path {
        Some(path) => {
            let input = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config = parse_config(&input)?;
            Ok((config, ConfigSource::File(path.to_path_buf())))
        }
        None => Ok((parse_config(EMBEDDED_CONFIG)?, ConfigSource::Embedded)),
    }
}
