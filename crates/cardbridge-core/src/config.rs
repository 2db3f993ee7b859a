use config::Config;
use serde::Deserialize;

use crate::error::BridgeResult;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default target version for generated cards.
    pub version: String,
    /// Default per-file cap for the splitter.
    pub split: usize,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `cardbridge.toml` into a `Settings`. Environment variables take
    /// precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it
    /// fails.
    pub fn load() -> BridgeResult<Self> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("output.version", "3.0")?
            .set_default("output.split", 100)?
            // Env file
            .add_source(
                config::Environment::default()
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("cardbridge.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> BridgeResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
