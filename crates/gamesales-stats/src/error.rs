//! Error types for gamesales-stats

use thiserror::Error;

/// Errors raised before a computation starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Bin layout that would produce degenerate buckets
    #[error("Invalid bin spec: {0}")]
    InvalidBinSpec(String),

    /// Edge list for fixed-bin counting is unusable
    #[error("Invalid bin edges: {0}")]
    InvalidEdges(String),

    #[error("Invalid bin count: {0}")]
    InvalidBinCount(usize),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
