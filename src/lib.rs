//! config-layers: Load layered YAML configuration
//!
//! Merges an ordered list of YAML files into one configuration, where later
//! files override the fields set by earlier ones. Files that cannot be read or
//! decoded are reported without stopping the remaining files from loading.

pub mod config;
pub mod domain;
pub mod error;

pub use config::{load_config_from_files, load_config_from_str, merge, LoadedConfig};
pub use domain::{Config, ConfigLayer, DatabaseConfig, DatabaseLayer};
pub use error::{FileError, FileErrors, LoadError};
