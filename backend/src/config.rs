//! Configuration management for the Farmer Advisory Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FAP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Generative vision model configuration
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Generative Language API endpoint
    pub api_endpoint: String,

    /// API key
    pub api_key: String,

    /// Model identifier used for image analysis and translation
    pub model: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, AppError> {
        Self::build().map_err(|e| AppError::Configuration(e.to_string()))
    }

    fn build() -> Result<Self, ConfigError> {
        let environment = std::env::var("FAP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "gemini.api_endpoint",
                "https://generativelanguage.googleapis.com",
            )?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.model", "gemini-2.5-flash")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FAP_ prefix)
            .add_source(
                Environment::with_prefix("FAP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_uses_defaults() {
        let config = Config::load().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
    }
}
