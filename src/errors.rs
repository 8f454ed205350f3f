//! Centralized error handling for gaussfield
//!
//! Configuration problems are detected before any work is dispatched; worker
//! failures surface as a single error for the whole evaluation.

use thiserror::Error;

/// Main error type for gaussfield operations
#[derive(Debug, Error)]
pub enum FieldError {
    /// Invalid bounds, step, sigma or worker count
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// An axis would contain no samples
    #[error("Axis '{axis}' has no samples over [{lower}, {upper}) with step {step}")]
    EmptyAxis {
        axis: String,
        lower: f64,
        upper: f64,
        step: f64,
    },

    /// The domain does not straddle the origin, so it cannot be split into quadrants
    #[error("Cannot split domain into quadrants: {message}")]
    DegenerateSplit { message: String },

    /// A quadrant task panicked or never delivered its result
    #[error("Worker for quadrant '{quadrant}' failed: {message}")]
    WorkerFailure { quadrant: String, message: String },

    /// Statistics computation errors
    #[error("Statistics computation error: {0}")]
    StatisticsError(String),

    /// Thread pool configuration error
    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),

    /// Quadrant grids could not be stitched back together
    #[error("Array error: {0}")]
    ArrayError(#[from] ndarray::ShapeError),

    /// NetCDF file operation errors
    #[error("NetCDF error: {0}")]
    NetCDFError(#[from] netcdf::Error),

    /// I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Metadata serialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl FieldError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        FieldError::InvalidConfig {
            message: message.into(),
        }
    }

    pub(crate) fn incompatible_shape() -> Self {
        FieldError::ArrayError(ndarray::ShapeError::from_kind(
            ndarray::ErrorKind::IncompatibleShape,
        ))
    }

    /// Whether the error was raised before any computation started
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FieldError::InvalidConfig { .. }
                | FieldError::EmptyAxis { .. }
                | FieldError::DegenerateSplit { .. }
        )
    }
}

/// Result type alias for gaussfield operations
pub type Result<T> = std::result::Result<T, FieldError>;
