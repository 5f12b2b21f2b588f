//! Error types for the roster pipeline.
//!
//! One error type per layer:
//!
//! - [`ParseError`] - reading and scanning the activity export
//! - [`TransformError`] - post-processing of the parsed roster
//! - [`WriteError`] - writing period tables and the summary report
//! - [`ConfigError`] - loading and validating configuration
//! - [`PipelineError`] - top-level orchestration
//!
//! Lower layers convert into [`PipelineError`] via `From`, so `?` works
//! across the whole run.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Parse Errors
// =============================================================================

/// Errors while reading the input export.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input file missing or unreadable.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the content.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Delimiter is not a single-byte character.
    #[error("Unsupported delimiter '{0}': must be a single ASCII character")]
    Delimiter(char),
}

// =============================================================================
// Transform Errors
// =============================================================================

/// Errors during roster post-processing.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Two activities in one period ended up with the same annotated label.
    #[error("Activity label '{label}' appears twice in period {period} after count annotation")]
    LabelCollision { period: String, label: String },
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Output file or directory could not be created or written.
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV writer error.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file unreadable.
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for roster post-processing.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for output writers.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for a full pipeline run.
pub type PipelineResult<T> = Result<T, PipelineError>;
