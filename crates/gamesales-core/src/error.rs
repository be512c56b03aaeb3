//! Error types for gamesales-core
//!
//! Provides error handling for:
//! - Dataset loading
//! - Configuration validation
//! - Selector parsing at the boundary

use gamesales_io::IoError;
use gamesales_stats::StatsError;
use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Dataset loading errors
    #[error("Failed to load dataset: {0}")]
    Io(#[from] IoError),

    /// Invalid statistical parameters
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A menu key that does not name any known option
    #[error("Unknown selection '{key}' for {menu}")]
    UnknownSelection { menu: &'static str, key: String },

    /// The selected column has no usable values
    #[error("No values available for {0}")]
    NoData(String),
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// A binning preset would produce degenerate buckets
    #[error("Invalid bin preset for {column}: {message}")]
    InvalidBins { column: String, message: String },

    /// Config text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
