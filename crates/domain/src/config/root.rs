use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::QueryConfig;
use super::resolver::ResolverConfig;

pub const DEFAULT_CONFIG_FILE: &str = "ferrous-nscheck.toml";

/// Main configuration structure for Ferrous NS Check
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Recursive resolvers used for discovery and nameserver address lookups
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Direct authoritative queries
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-nscheck.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.upstream_servers.is_empty() {
            self.resolver.upstream_servers = overrides.upstream_servers;
        }
        if let Some(timeout) = overrides.timeout_ms {
            self.resolver.query_timeout_ms = timeout;
            self.query.timeout_ms = timeout;
        }
        if let Some(deadline) = overrides.deadline_ms {
            self.query.deadline_ms = Some(deadline);
        }
        if let Some(port) = overrides.nameserver_port {
            self.query.nameserver_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.upstream_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }

        if let Err(server) = self.resolver.upstream_addrs() {
            return Err(ConfigError::Validation(format!(
                "Invalid upstream server address: {}",
                server
            )));
        }

        if self.resolver.query_timeout_ms == 0 || self.query.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.query.nameserver_port == 0 {
            return Err(ConfigError::Validation(
                "Nameserver port cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub upstream_servers: Vec<String>,
    pub timeout_ms: Option<u64>,
    pub deadline_ms: Option<u64>,
    pub nameserver_port: Option<u16>,
    pub log_level: Option<String>,
}
