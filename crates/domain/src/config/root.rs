use serde::{Deserialize, Serialize};

use super::database::{DatabaseBackend, DatabaseConfig};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordEntry;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "prionis-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/prionis-dns/config.toml";

/// Main configuration structure for Prionis DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening sockets and request limits
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Record store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Records served by the in-memory backend
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. prionis-dns.toml in current directory
    /// 3. /etc/prionis-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
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

        if self.server.max_concurrent_requests == 0 {
            return Err(ConfigError::Validation(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }

        if self.server.max_tcp_connections == 0 {
            return Err(ConfigError::Validation(
                "max_tcp_connections must be at least 1".to_string(),
            ));
        }

        if self.server.udp_max_response_size < 512 {
            return Err(ConfigError::Validation(format!(
                "udp_max_response_size {} is below the RFC 1035 minimum of 512",
                self.server.udp_max_response_size
            )));
        }

        if self.database.backend == DatabaseBackend::Sqlite && self.database.path.is_empty() {
            return Err(ConfigError::Validation(
                "database.path is required for the sqlite backend".to_string(),
            ));
        }

        // Only the memory backend serves [[records]].
        if self.database.backend == DatabaseBackend::Memory {
            for (index, entry) in self.records.iter().enumerate() {
                entry.to_record().map_err(|e| {
                    ConfigError::Validation(format!(
                        "records[{}] ({}): {}",
                        index, entry.domain, e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
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
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
