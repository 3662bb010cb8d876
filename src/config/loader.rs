//! Config file loading

use crate::config::merge::merge;
use crate::domain::{Config, ConfigLayer};
use crate::error::{FileError, FileErrors, LoadError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Label used in errors for content that did not come from a file.
const IN_MEMORY: &str = "<memory>";

/// Merged configuration together with the files that could not be loaded.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub errors: FileErrors,
}

impl LoadedConfig {
    /// True when at least one file failed but the config is still usable.
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Per-file failures, or `None` when every file loaded.
    pub fn errors(&self) -> Option<&FileErrors> {
        if self.errors.is_empty() {
            None
        } else {
            Some(&self.errors)
        }
    }

    /// The config only if every file loaded.
    pub fn into_strict(self) -> Result<Config, FileErrors> {
        if self.errors.is_empty() {
            Ok(self.config)
        } else {
            Err(self.errors)
        }
    }

    /// Split into the config and the aggregate error, if any.
    pub fn into_parts(self) -> (Config, Option<FileErrors>) {
        let errors = if self.errors.is_empty() { None } else { Some(self.errors) };
        (self.config, errors)
    }
}

/// Load and merge configuration files in order.
///
/// Later files override the fields set by earlier ones. A file that cannot be
/// opened or decoded is recorded and skipped; the remaining files are still
/// applied. Fails with [`LoadError::NoFiles`] for an empty list and with
/// [`LoadError::AllFailed`] when no file could be loaded.
pub fn load_config_from_files<I, P>(paths: I) -> Result<LoadedConfig, LoadError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut config = Config::default();
    let mut errors = FileErrors::new();
    let mut attempted = 0usize;

    for path in paths {
        let path = path.as_ref();
        attempted += 1;
        match load_layer(path) {
            Ok(layer) => {
                tracing::debug!("Loaded config layer {}", path.display());
                config = merge(config, layer);
            }
            Err(err) => {
                tracing::warn!("Skipping config file: {}", err);
                errors.push(err);
            }
        }
    }

    if attempted == 0 {
        return Err(LoadError::NoFiles);
    }
    if errors.len() == attempted {
        return Err(LoadError::AllFailed(errors));
    }

    tracing::debug!("Merged {} of {} config files", attempted - errors.len(), attempted);
    Ok(LoadedConfig { config, errors })
}

/// Decode a single YAML document held in memory.
pub fn load_config_from_str(content: &str) -> Result<Config, FileError> {
    let layer = decode_layer(content.as_bytes(), Path::new(IN_MEMORY))?;
    Ok(merge(Config::default(), layer))
}

fn load_layer(path: &Path) -> Result<ConfigLayer, FileError> {
    let content = fs::read(path)
        .map_err(|source| FileError::Open { path: path.to_path_buf(), source })?;
    decode_layer(&content, path)
}

/// Decode the first YAML document of `content` into a layer.
///
/// Later documents are ignored. A stream with no document at all is an error;
/// a `null` document is an empty layer.
fn decode_layer(content: &[u8], path: &Path) -> Result<ConfigLayer, FileError> {
    let empty = || FileError::EmptyDocument { path: path.to_path_buf() };
    if !has_document(content) {
        return Err(empty());
    }

    let document = serde_yaml::Deserializer::from_slice(content).next().ok_or_else(empty)?;
    let layer = Option::<ConfigLayer>::deserialize(document)
        .map_err(|source| FileError::Decode { path: path.to_path_buf(), source })?;
    Ok(layer.unwrap_or_default())
}

/// False for streams holding only whitespace and comments.
///
/// Content that is not UTF-8 is left for the YAML parser to reject.
fn has_document(content: &[u8]) -> bool {
    match std::str::from_utf8(content) {
        Ok(text) => {
            text.lines().map(str::trim).any(|line| !line.is_empty() && !line.starts_with('#'))
        }
        Err(_) => true,
    }
}
