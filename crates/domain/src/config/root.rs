use serde::{Deserialize, Serialize};
use std::path::Path;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordSeed;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "vinyl.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/vinyl/config.toml";

/// Main configuration structure for Vinyl
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (ports, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// DNS transport configuration
    #[serde(default)]
    pub dns: DnsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Records loaded into the store at start-up
    #[serde(default)]
    pub records: Vec<RecordSeed>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. vinyl.toml in current directory
    /// 3. /etc/vinyl/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.api_port {
            self.server.api_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.api_port == 0 {
            return Err(ConfigError::Validation("API port cannot be 0".to_string()));
        }

        if self.dns.tcp_enabled && self.server.dns_port == self.server.api_port {
            return Err(ConfigError::Validation(format!(
                "DNS over TCP and the management API cannot share port {}",
                self.server.dns_port
            )));
        }

        Ok(())
    }

    pub fn dns_bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.dns_port)
    }

    pub fn api_bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.api_port)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub api_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
