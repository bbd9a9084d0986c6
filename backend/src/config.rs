//! Configuration management for the Irrigation Forecast Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with IFP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Generative assistant configuration
    pub assistant: AssistantConfig,

    /// Forecast defaults and policy
    pub forecast: ForecastConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Generative language API endpoint
    pub api_endpoint: String,

    /// API key; leave empty to disable the chat endpoint
    pub api_key: String,

    /// Model name used for chat relay
    pub model: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Starting soil moisture (%) when the request carries no measurement
    pub default_initial_moisture: f64,

    /// Largest accepted forecast horizon in days
    pub max_horizon_days: u32,

    /// Skip irrigation on days where rain alone covers crop water use
    pub skip_when_rain_covers_demand: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("IFP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.api_key", "")?
            .set_default("weather.timeout_seconds", 10)?
            .set_default(
                "assistant.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta2",
            )?
            .set_default("assistant.api_key", "")?
            .set_default("assistant.model", "chat-bison-001")?
            .set_default("assistant.timeout_seconds", 10)?
            .set_default("forecast.default_initial_moisture", 65.0)?
            .set_default("forecast.max_horizon_days", 7)?
            .set_default("forecast.skip_when_rain_covers_demand", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (IFP_ prefix)
            .add_source(
                Environment::with_prefix("IFP")
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
