//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{LocaleError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_locale_config(&settings.locale)?;
    validate_resource_config(&settings.resources)?;
    validate_preference_config(&settings.preferences)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate language configuration
fn validate_locale_config(config: &super::LocaleConfig) -> Result<()> {
    if config.fallback_language.is_empty() {
        return Err(LocaleError::Config(
            "Fallback language is required".to_string(),
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(LocaleError::Config(
            "At least one supported language is required".to_string(),
        ));
    }

    if !config.supported_languages.contains(&config.fallback_language) {
        return Err(LocaleError::Config(
            "Fallback language must be in supported languages list".to_string(),
        ));
    }

    for code in &config.supported_languages {
        crate::source::check_language_code(code)?;
    }

    Ok(())
}

/// Validate resource configuration
fn validate_resource_config(config: &super::ResourceConfig) -> Result<()> {
    if config.dir.is_empty() {
        return Err(LocaleError::Config(
            "Language pack directory is required".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(LocaleError::Config(
            "Resource timeout must be greater than 0".to_string(),
        ));
    }

    if let Some(base_url) = &config.base_url {
        Url::parse(base_url)?;
    }

    Ok(())
}

/// Validate preference configuration
fn validate_preference_config(config: &super::PreferenceConfig) -> Result<()> {
    if config.path.is_empty() {
        return Err(LocaleError::Config(
            "Preference file path is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LocaleError::Config("Log level is required".to_string()));
    }

    tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| LocaleError::Config(format!("Invalid log level: {e}")))?;

    Ok(())
}
