//! Error types for chart-deps
//!
//! Every failure is fatal for the run; the binary prints the message once and exits non-zero.
//! Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chart-deps operations
pub type Result<T> = std::result::Result<T, ChartDepsError>;

/// Error type covering every way an extraction run can fail
#[derive(Error, Debug)]
pub enum ChartDepsError {
    /// The manifest file could not be opened or read
    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not a YAML mapping
    #[error("Invalid manifest {path}: {source}")]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML parsing errors for in-memory documents
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Top-level `dependencies` key is absent or null
    #[error("Manifest has no 'dependencies' list")]
    MissingDependencies,

    /// A dependency entry has no `repository` key
    #[error("Dependency #{index} ({name}) has no 'repository' field")]
    MissingRepository { index: usize, name: String },

    /// A dependency entry's `repository` value is not a string
    #[error("Dependency #{index} ({name}) has a non-text 'repository' value")]
    RepositoryNotText { index: usize, name: String },

    /// I/O errors while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}
