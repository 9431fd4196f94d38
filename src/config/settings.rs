//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub locale: LocaleConfig,
    pub resources: ResourceConfig,
    pub preferences: PreferenceConfig,
    pub logging: LoggingConfig,
}

/// Language configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocaleConfig {
    /// The language loaded when a requested pack cannot be obtained
    pub fallback_language: String,
    pub supported_languages: Vec<String>,
}

/// Language pack resource configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceConfig {
    /// Remote resource root serving `<code>.json` documents
    pub base_url: Option<String>,
    /// Local directory holding `<code>.json` files
    pub dir: String,
    pub timeout_seconds: u64,
}

/// Persisted preference configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreferenceConfig {
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PODLOCALE"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::utils::errors::Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: LocaleConfig {
                fallback_language: "en".to_string(),
                supported_languages: vec!["en".to_string(), "sl".to_string()],
            },
            resources: ResourceConfig {
                base_url: None,
                dir: "translations".to_string(),
                timeout_seconds: 5,
            },
            preferences: PreferenceConfig {
                path: ".podlocale/language.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
            },
        }
    }
}
