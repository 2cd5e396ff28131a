//! Error types for radarkit-chart.

use thiserror::Error;

/// Errors raised by the radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// A radar chart needs at least three axes.
    #[error("axis count must be at least 3, got {0}")]
    InvalidAxisCount(usize),

    /// A length option was NaN or infinite.
    #[error("{0} must be a finite length")]
    InvalidLength(&'static str),

    /// Series values could not be accepted.
    #[error("invalid data for series '{tag}': {reason}")]
    InvalidInput {
        /// Series tag
        tag: String,
        /// What was wrong with the values
        reason: String,
    },

    /// No series with this tag exists.
    #[error("no series tagged '{0}'")]
    NotFound(String),

    /// Neither the chart nor its canvas recognises the option.
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// Options document could not be parsed.
    #[error("invalid chart options: {0}")]
    Options(String),
}

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
