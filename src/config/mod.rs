//! Configuration loading and merging
//!
//! Reads YAML files in order and folds each one into a single [`Config`],
//! with later files taking precedence field by field.
//!
//! [`Config`]: crate::domain::Config

pub mod loader;
pub mod merge;

pub use loader::{load_config_from_files, load_config_from_str, LoadedConfig};
pub use merge::merge;
