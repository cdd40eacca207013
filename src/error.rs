//! Error types for chart definitions.

use thiserror::Error;

/// Errors that can occur while building, storing, or rendering a chart.
#[derive(Error, Debug)]
pub enum ChartError {
    /// `x` or `y` was empty.
    #[error("empty input: {0} must contain at least one value")]
    EmptyInput(&'static str),

    /// A parallel sequence does not match the number of x-values.
    #[error("length mismatch: {field} has {found} values, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// Unknown display mode.
    #[error("invalid mode {0:?}, expected one of: markers, bar, line")]
    InvalidMode(String),

    /// `build()` was called before any series was added.
    #[error("no series: add at least one series before building the chart")]
    NoSeries,

    /// A value is out of range (non-positive size, negative margin, NaN, ...).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Backend failed to draw the chart.
    #[error("rendering error: {0}")]
    Render(String),
}

impl ChartError {
    /// True for the validation variants raised by the builder.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChartError::EmptyInput(_)
                | ChartError::LengthMismatch { .. }
                | ChartError::InvalidMode(_)
                | ChartError::NoSeries
                | ChartError::InvalidValue(_)
        )
    }
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
