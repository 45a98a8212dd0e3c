//! Error types for modkit operations.
//!
//! This module defines [`ModkitError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Preflight failures are terminal for the current command and are never
//!   retried; `main` prints the message and exits non-zero
//! - Messages for version conflicts and unmappable versions are user-facing
//!   and displayed verbatim
//! - Use `anyhow::Error` (via `ModkitError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for modkit operations.
#[derive(Debug, Error)]
pub enum ModkitError {
    /// Mutually exclusive version directives were supplied.
    #[error("{0}")]
    VersionConflict(String),

    /// A version string could not be mapped to an installable toolset.
    #[error("{0}")]
    UnmappableVersion(String),

    /// The current directory is not recognized as a module.
    #[error("{message}")]
    NotInModule { message: String },

    /// Failed to read or parse a module's metadata.json.
    #[error("Failed to parse module metadata at {path}: {message}")]
    MetadataParse { path: PathBuf, message: String },

    /// Failed to read or parse a version catalog file.
    #[error("Failed to load version catalog at {path}: {message}")]
    CatalogLoad { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for modkit operations.
pub type Result<T> = std::result::Result<T, ModkitError>;
