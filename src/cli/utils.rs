//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::ValueEnum;
use config_layers::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Serialize `config` in the requested format, always ending with a newline.
pub fn render_config(config: &Config, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Yaml => serde_yaml::to_string(config).context("Failed to render YAML")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to render JSON")?
        }
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
