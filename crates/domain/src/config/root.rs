use serde::{Deserialize, Serialize};

use super::answer::AnswerConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::{ServerConfig, MAX_DATAGRAM_SIZE};
use crate::dns_message::header::HEADER_LEN;

const LOCAL_CONFIG_PATH: &str = "loopdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/loopdns/config.toml";

/// Main configuration structure for loopdns
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket
    #[serde(default)]
    pub server: ServerConfig,

    /// Synthetic answer record
    #[serde(default)]
    pub answer: AnswerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. loopdns.toml in current directory
    /// 3. /etc/loopdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.max_datagram_size < HEADER_LEN {
            return Err(ConfigError::Validation(format!(
                "max_datagram_size {} is smaller than a {} byte header",
                self.server.max_datagram_size, HEADER_LEN
            )));
        }

        if self.server.max_datagram_size > MAX_DATAGRAM_SIZE {
            return Err(ConfigError::Validation(format!(
                "max_datagram_size {} exceeds the largest UDP payload of {} bytes",
                self.server.max_datagram_size, MAX_DATAGRAM_SIZE
            )));
        }

        if self.answer.ttl < 0 {
            return Err(ConfigError::Validation(format!(
                "Answer TTL cannot be negative: {}",
                self.answer.ttl
            )));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file that `load` would pick
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
