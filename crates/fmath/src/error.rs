//! Error type for the few operations that can fail.
//!
//! Everything else degrades silently: normalizing a zero vector, inverting a
//! singular matrix or intersecting parallel rays all return a defined value.

use thiserror::Error;

/// Result alias for fallible math operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors raised by component access and by constructors that need input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Component index outside `0..len`.
    #[error("index {index} is out of range for {len} components")]
    IndexOutOfRange { index: usize, len: usize },

    /// A bounding volume was requested for an empty point set.
    #[error("cannot build a bounding volume from an empty point set")]
    EmptyPointSet,

    /// A fixed-size value was built from a slice of the wrong length.
    #[error("expected {expected} values, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

impl MathError {
    /// Create an index error for a value with `len` components.
    pub fn index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Returns true for out-of-range component access.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns true for invalid constructor arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::EmptyPointSet | Self::InvalidLength { .. })
    }
}
