use crate::types::Dimensions;
use std::fmt;
use thiserror::Error;

/// Errors raised while building or normalizing a depth map
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DepthError {
    #[error("Depth map dimensions must be non-zero, got {0}")]
    EmptyDimensions(Dimensions),

    #[error("Depth map sample count mismatch: expected {expected} samples, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("Invalid 32-bit depth data length: {len} bytes is not a multiple of 4")]
    TruncatedSample { len: usize },

    #[error("Depth map has a degenerate range (min={min}, max={max})")]
    DegenerateRange { min: f32, max: f32 },

    #[error("Unknown capture orientation: {0}")]
    UnknownOrientation(String),
}

/// Error type that keeps the frame dimensions once they are known
#[derive(Debug)]
pub enum ProcessError {
    /// File could not be read - nothing decoded
    ReadFailed(String),

    /// Bytes read but they do not form a depth map of the requested size
    InvalidBuffer(String),

    /// Depth map decoded, but strict normalization rejected it
    NormalizationFailed { dimensions: Dimensions, error: String },

    /// Normalized, but the oriented image could not be built
    ConversionFailed { dimensions: Dimensions, error: String },

    /// Image ready but writing the normalized samples failed
    WriteFailed { dimensions: Dimensions, error: String },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::ReadFailed(msg) => write!(f, "{msg}"),
            ProcessError::InvalidBuffer(msg) => write!(f, "{msg}"),
            ProcessError::NormalizationFailed { error, .. } => write!(f, "{error}"),
            ProcessError::ConversionFailed { error, .. } => write!(f, "{error}"),
            ProcessError::WriteFailed { error, .. } => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ProcessError {}

impl ProcessError {
    /// Returns the frame dimensions if decoding got that far
    pub fn dimensions(&self) -> Option<Dimensions> {
        match self {
            ProcessError::NormalizationFailed { dimensions, .. }
            | ProcessError::ConversionFailed { dimensions, .. }
            | ProcessError::WriteFailed { dimensions, .. } => Some(*dimensions),
            _ => None,
        }
    }
}
