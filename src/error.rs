//! Error types for configuration loading

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load a single configuration file.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("decode {}: empty document", .path.display())]
    EmptyDocument { path: PathBuf },
}

impl FileError {
    /// Path of the file that failed.
    pub fn path(&self) -> &Path {
        match self {
            FileError::Open { path, .. }
            | FileError::Decode { path, .. }
            | FileError::EmptyDocument { path } => path,
        }
    }
}

/// Ordered collection of per-file failures.
///
/// Displays as the individual messages joined by newlines. Each failure stays
/// available through [`FileErrors::iter`].
#[derive(Debug, Default)]
pub struct FileErrors(Vec<FileError>);

impl FileErrors {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure after the ones already held.
    pub fn push(&mut self, err: FileError) {
        self.0.push(err);
    }

    /// Number of failed files.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no file failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failures in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileError> {
        self.0.iter()
    }

    /// Paths of the failed files, in input order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(FileError::path)
    }
}

impl fmt::Display for FileErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FileErrors {}

impl IntoIterator for FileErrors {
    type Item = FileError;
    type IntoIter = std::vec::IntoIter<FileError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileErrors {
    type Item = &'a FileError;
    type IntoIter = std::slice::Iter<'a, FileError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<FileError>> for FileErrors {
    fn from(errors: Vec<FileError>) -> Self {
        Self(errors)
    }
}

/// Failure that leaves no usable configuration.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no files provided")]
    NoFiles,

    #[error("failed to load config from all files")]
    AllFailed(#[source] FileErrors),
}

impl LoadError {
    /// Per-file failures behind this error, if any files were attempted.
    pub fn file_errors(&self) -> Option<&FileErrors> {
        match self {
            LoadError::NoFiles => None,
            LoadError::AllFailed(errors) => Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(name: &str) -> FileError {
        FileError::Open {
            path: PathBuf::from(name),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
    }

    #[test]
    fn test_file_errors_join_in_order() {
        let errors = FileErrors::from(vec![
            missing("a.yaml"),
            FileError::EmptyDocument { path: PathBuf::from("b.yaml") },
        ]);

        assert_eq!(errors.to_string(), "open a.yaml: not found\ndecode b.yaml: empty document");
        let paths: Vec<_> = errors.paths().collect();
        assert_eq!(paths, vec![Path::new("a.yaml"), Path::new("b.yaml")]);
    }

    #[test]
    fn test_all_failed_keeps_per_file_errors() {
        let err = LoadError::AllFailed(FileErrors::from(vec![missing("gone.yaml")]));
        assert_eq!(err.to_string(), "failed to load config from all files");

        let inner = err.file_errors().expect("per-file errors");
        assert_eq!(inner.len(), 1);
        assert!(matches!(inner.iter().next(), Some(FileError::Open { .. })));

        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("gone.yaml"));
    }

    #[test]
    fn test_no_files_has_no_file_errors() {
        assert!(LoadError::NoFiles.file_errors().is_none());
        assert_eq!(LoadError::NoFiles.to_string(), "no files provided");
    }
}
