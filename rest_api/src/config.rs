// rest_api/src/config.rs

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Environment variables `MANAS_HOST`, `MANAS_PORT` and `MANAS_LOG_LEVEL`
/// override the file.
pub const ENV_PREFIX: &str = "MANAS";

/// Represents the configuration for the REST API server itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RestApiConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        RestApiConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RestApiConfig {
    /// Applies command-line flags, which take precedence over every other
    /// layer.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Loads the REST API configuration: defaults, then the optional file
/// (format taken from its extension), then `MANAS_*` environment variables.
pub fn load_rest_api_config(config_file: Option<&Path>) -> Result<RestApiConfig> {
    load_with_environment(config_file, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_environment(
    config_file: Option<&Path>,
    environment: Environment,
) -> Result<RestApiConfig> {
    let mut builder = Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?;

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings = builder
        .add_source(environment)
        .build()
        .with_context(|| match config_file {
            Some(path) => format!("Failed to read REST API config file {}", path.display()),
            None => "Failed to assemble REST API configuration".to_string(),
        })?;

    settings
        .try_deserialize()
        .context("Failed to parse REST API configuration")
}
