//! Show command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{render_config, OutputFormat};
use config_layers::load_config_from_files;

#[derive(Args)]
pub struct ShowArgs {
    /// Configuration files, lowest precedence first
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Print the password instead of masking it
    #[arg(long)]
    pub show_secrets: bool,

    /// Fail if any file could not be loaded
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let loaded = load_config_from_files(&args.files)?;

    let config = if args.strict {
        loaded
            .into_strict()
            .context("Refusing partial configuration in strict mode")?
    } else {
        let (config, errors) = loaded.into_parts();
        for err in errors.iter().flatten() {
            eprintln!("warning: {}", err);
        }
        config
    };

    let config = if args.show_secrets { config } else { config.redacted() };
    print!("{}", render_config(&config, args.format)?);

    Ok(())
}
