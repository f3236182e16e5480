//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Environment variable naming a YAML configuration file
pub const CONFIG_PATH_ENV: &str = "GRUBDASH_CONFIG";

/// Environment variable overriding `bind_address`
pub const BIND_ENV: &str = "GRUBDASH_BIND";

/// Server configuration
///
/// ```yaml
/// bind_address: "0.0.0.0:5000"
/// log_level: debug
/// seed_file: data/seed.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Default tracing filter, used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional JSON file with initial dishes and orders
    #[serde(default)]
    pub seed_file: Option<String>,
}

fn default_bind_address() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            log_level: default_log_level(),
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `GRUBDASH_CONFIG` (defaults otherwise),
    /// then apply the `GRUBDASH_BIND` override
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        config.with_bind_override(std::env::var(BIND_ENV).ok())
    }

    /// Replace `bind_address` when an override is given
    pub fn with_bind_override(mut self, bind: Option<String>) -> Result<Self, ConfigError> {
        if let Some(bind) = bind {
            self.bind_address = bind;
            self.validate()?;
        }
        Ok(self)
    }

    /// The bind address as a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "bind_address".to_string(),
                value: self.bind_address.clone(),
                message: e.to_string(),
            })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        Ok(())
    }
}
