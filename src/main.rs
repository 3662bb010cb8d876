//! config-layers: Load layered YAML configuration
//!
//! Command-line front end for inspecting and checking merged configuration files.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
