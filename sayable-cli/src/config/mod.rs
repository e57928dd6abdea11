//! Configuration and model loading
//!
//! The core takes a resolved [`Config`] and a [`ClassifierModel`] by
//! reference; this module is where both come from.

use crate::error::CliError;
use anyhow::{Context, Result};
use sayable_core::{ClassifierModel, Config};
use std::fs;
use std::path::Path;

/// Supported configuration file syntaxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.json` files are JSON, everything else is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Parse a configuration document; keys it omits keep their defaults
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    let config = match format {
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| CliError::ConfigError(format!("invalid JSON: {e}")))?,
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| CliError::ConfigError(format!("invalid TOML: {e}")))?,
    };
    Ok(config)
}

/// Load the configuration at `path`, or the defaults when there is none
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        log::debug!("Using default configuration");
        return Ok(Config::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = parse_config(&content, ConfigFormat::from_path(path))
        .with_context(|| format!("Failed to load config file: {}", path.display()))?;

    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load a JSON model snapshot, or train the built-in model when there is none
pub fn load_model(path: Option<&Path>) -> Result<ClassifierModel> {
    let Some(path) = path else {
        log::debug!("Using built-in reaction model");
        return Ok(ClassifierModel::builtin());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file: {}", path.display()))?;
    let model: ClassifierModel = serde_json::from_str(&content)
        .map_err(|e| CliError::ModelError(e.to_string()))
        .with_context(|| format!("Failed to load model file: {}", path.display()))?;

    log::info!(
        "Loaded model from {} ({} labels, {} tokens)",
        path.display(),
        model.labels().len(),
        model.vocab().len()
    );
    Ok(model)
}

/// Render `config` as a TOML document
pub fn config_to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}
