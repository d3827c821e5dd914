//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use mirabilis_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "content_dir": config.content_dir,
                    "allow_schema_reset": config.allow_schema_reset
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:           {}", config.data_dir.display());
            println!(
                "  content_dir:        {}",
                config
                    .content_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(bundled)".to_string())
            );
            println!("  allow_schema_reset: {}", config.allow_schema_reset);
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = PathBuf::from(value.clone());
        }
        "content_dir" => {
            config.content_dir = if value.is_empty() || value == "none" {
                None
            } else {
                Some(PathBuf::from(value.clone()))
            };
        }
        "allow_schema_reset" => {
            config.allow_schema_reset = value
                .parse()
                .context("Invalid value for allow_schema_reset. Use 'true' or 'false'.")?;
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, content_dir, allow_schema_reset",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
