//! Error types for binary encoding.

use std::io;
use thiserror::Error;

/// Encoding or decoding error.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Underlying reader or writer failed, including unexpected end of input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input slice shorter than the encoded value.
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
}

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
