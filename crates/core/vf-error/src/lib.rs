//! Error types for vendorflow.
//!
//! This crate provides:
//! - [`VfError`] - Top-level error enum
//! - [`LoadError`] - Failures while loading a vendor mapping document
//! - [`ConfigError`] - Failures while building filter configuration
//!
//! Per-event processing never produces errors; these types only cover the
//! one-time setup path.

use thiserror::Error;

/// Top-level error type for vendorflow.
#[derive(Error, Debug)]
pub enum VfError {
    /// Mapping document loading errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Mapping document loading errors.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Mapping document does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Mapping document exists but could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// Mapping document is not a sequence of records
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required plugin option was not supplied
    #[error("Missing required option '{0}'")]
    MissingOption(&'static str),
}

impl VfError {
    /// Returns true if this error means the mapping document is absent.
    ///
    /// Absence is the expected way to run a filter in passthrough mode, so
    /// callers log it more quietly than other load failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Load(LoadError::NotFound(_)))
    }
}

/// Result type alias using VfError.
pub type Result<T> = std::result::Result<T, VfError>;
