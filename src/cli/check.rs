//! Check command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use config_layers::load_config_from_files;

#[derive(Args)]
pub struct CheckArgs {
    /// Configuration files to check
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let mut failed = 0usize;

    for file in &args.files {
        match load_config_from_files([file]) {
            Ok(_) => println!("ok    {}", file.display()),
            Err(err) => {
                failed += 1;
                for file_err in err.file_errors().into_iter().flatten() {
                    println!("FAIL  {}", file_err);
                }
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} config files failed to load", failed, args.files.len());
    }
    Ok(())
}
