//! Error types for matrixsort
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Axis and combination model errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AxisError {
    /// Axis declared without a name
    #[error("Axis name cannot be empty")]
    EmptyName,

    /// Axis name declared twice in one matrix
    #[error("Axis '{name}' is declared more than once")]
    DuplicateAxis { name: String },

    /// Axis declared without any values
    #[error("Axis '{name}' has no values")]
    NoValues { name: String },

    /// Same value listed twice on one axis
    #[error("Axis '{name}' lists value '{value}' more than once")]
    DuplicateValue { name: String, value: String },

    /// Combination refers to an axis the matrix does not declare
    #[error("Axis '{name}' is not part of the matrix")]
    UnknownAxis { name: String },

    /// Combination uses a value the axis does not allow
    #[error("Value '{value}' is not legal for axis '{name}'")]
    UnknownValue { name: String, value: String },

    /// Combination does not assign every axis
    #[error("Combination '{combination}' does not assign axis '{name}'")]
    MissingAxis { combination: String, name: String },

    /// Combination string is not `name=value,name=value`
    #[error("Malformed combination '{input}': {reason}")]
    MalformedCombination { input: String, reason: String },
}

/// Sorter configuration errors
///
/// These are reported when a sorter is validated against a project and must
/// block acceptance of the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SorterError {
    /// Heads-and-tails axis is not declared on the project
    #[error("Axis '{axis}' undefined in project.")]
    AxisUndefined { axis: String },
}

/// Manifest (matrix.toml) errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("Manifest not found at '{path}'")]
    NotFound { path: PathBuf },

    /// Failed to read manifest
    #[error("Failed to read manifest '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Invalid TOML or schema mismatch
    #[error("Failed to parse manifest: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    /// Environment substitution failed
    #[error("Environment substitution failed: {0}")]
    Substitution(String),

    /// Duration recorded for a combination the matrix does not produce
    #[error("Duration given for unknown combination '{combination}': {reason}")]
    UnknownDurationKey { combination: String, reason: String },
}

/// Top-level matrixsort error type
#[derive(Error, Debug)]
pub enum MatrixsortError {
    /// Axis model error
    #[error("Axis error: {0}")]
    Axis(#[from] AxisError),

    /// Sorter validation error
    #[error("Sorter error: {0}")]
    Sorter(#[from] SorterError),

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
}
