//! Validate command implementation

use crate::config::{load_config, load_model};
use crate::error::CliError;
use anyhow::Result;
use clap::{ArgGroup, Args};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(true)
        .args(["config", "model"])
))]
pub struct ValidateArgs {
    /// Configuration file to validate
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Model snapshot to validate
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let mut failures = Vec::new();

        if let Some(path) = &self.config {
            println!("Validating configuration: {}", path.display());
            match load_config(Some(path.as_path())).and_then(|config| {
                config
                    .validate()
                    .map_err(|e| CliError::ConfigError(e.to_string()))?;
                Ok(config)
            }) {
                Ok(config) => {
                    println!("✓ Configuration is valid!");
                    println!("  Allowed tags: {}", config.allowed_tags.join(" "));
                    println!("  Tagging enabled: {}", config.tagger_enabled);
                }
                Err(e) => {
                    println!("✗ Configuration is invalid!");
                    println!("  Error: {e:#}");
                    failures.push(e);
                }
            }
        }

        if let Some(path) = &self.model {
            println!("Validating model: {}", path.display());
            match load_model(Some(path.as_path())) {
                Ok(model) => {
                    println!("✓ Model is valid!");
                    println!("  Labels: {}", model.labels().join(", "));
                    println!("  Vocabulary: {} tokens", model.vocab().len());
                }
                Err(e) => {
                    println!("✗ Model is invalid!");
                    println!("  Error: {e:#}");
                    failures.push(e);
                }
            }
        }

        match failures.into_iter().next() {
            Some(e) => Err(anyhow::anyhow!("Validation failed: {:#}", e)),
            None => Ok(()),
        }
    }
}
