//! Generate config command implementation

use crate::config::config_to_toml;
use anyhow::{Context, Result};
use clap::Args;
use sayable_core::Config;
use std::fs;
use std::path::PathBuf;

const HEADER: &str = "\
# sayable configuration
#
# Every key is optional; deleted keys fall back to the values shown here.
# Enum options:
#   tag_position    = prefix | suffix
#   time_style      = 12h | 24h
#   time_zero       = oclock | hundred
#   ip_digit_style  = single | grouped
#   paren_policy    = strip | unwrap | expand | keep
#   path_policy     = speak | keep
#   url_policy      = domain | full

";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust pronunciations and policies");
        println!("2. Validate your configuration:");
        println!("   sayable validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   sayable process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Default configuration rendered as commented TOML
pub fn generate_template() -> Result<String> {
    Ok(format!("{HEADER}{}", config_to_toml(&Config::default())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, ConfigFormat};
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("sayable.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("sayable.toml"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let template = generate_template().unwrap();
        assert!(template.starts_with("# sayable configuration"));
        assert!(template.contains("tag_min_confidence = 0.55"));
        assert!(template.contains("[tech_pronunciations]"));

        let parsed = parse_config(&template, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sayable.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("time_style = \"12h\""));
    }
}
