//! Server configuration
//!
//! Values are layered: built-in defaults, then an optional config file
//! (`config.yaml`, `config.toml`, ... or whatever `LOADPROBE_CONFIG` names),
//! then `LOADPROBE__SECTION__KEY` environment variables. A `.env` file is
//! loaded into the environment first.

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};

const ENV_PREFIX: &str = "LOADPROBE";
const CONFIG_FILE_ENV: &str = "LOADPROBE_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_ROTATIONS: &[&str] = &["daily", "hourly", "minutely", "never"];

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for request bodies, in bytes.
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_request_body_size: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    pub file_rotation: String,
    pub service_name: String,
    pub deployment_environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "loadprobe".to_string(),
            file_rotation: "daily".to_string(),
            service_name: "loadprobe".to_string(),
            deployment_environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let file_name =
            std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        config::Config::builder()
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.server.max_request_body_size == 0 {
            return Err("server.max_request_body_size must be non-zero".to_string());
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }
        if !LOG_ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            return Err(format!(
                "logging.file_rotation '{}' is not one of {}",
                self.logging.file_rotation,
                LOG_ROTATIONS.join(", ")
            ));
        }
        Ok(())
    }

    /// Resolve `server.host:server.port` to the address the listener binds.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let target = format!("{}:{}", self.server.host, self.server.port);
        target
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| anyhow::anyhow!("No socket address resolved for {target}"))
    }
}
