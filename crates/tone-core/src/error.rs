//! Error types for color dataset analysis
//!
//! Provides a unified error type for all tone-stats crates.

use thiserror::Error;

/// Core error type for color analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// A feature name outside the closed set of known facial features
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// A metric name outside the closed set of known metrics
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// A color space name outside the closed set of hsl and lch
    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    /// A contrast pair name outside the fixed pairing table
    #[error("Unknown contrast pair: {0}")]
    UnknownContrastPair(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A scatter-point index past the end of the filtered sequence
    #[error("Point index {index} out of range for {len} filtered records")]
    PointOutOfRange { index: usize, len: usize },

    /// IO error while reading a dataset file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dataset document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a point index past the filtered sequence
    pub fn point_out_of_range(index: usize, len: usize) -> Self {
        Self::PointOutOfRange { index, len }
    }
}
