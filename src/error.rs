//! Error types shared across the crate.
//!
//! The codec itself is total and never fails. Errors only arise at the edges:
//! malformed byte streams, pixel buffers whose data does not match their
//! dimensions, and injected error sources that misbehave.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input that cannot be interpreted (e.g. a truncated codeword stream)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Raw pixel data does not match `width * height`
    #[error("dimension mismatch: expected {expected} pixels, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An error source produced a bit index outside the codeword
    #[error("bit index {index} out of range for a {len}-bit codeword")]
    BitIndexOutOfRange { index: usize, len: usize },

    /// A scripted error source needs at least one index to replay
    #[error("scripted error sequence is empty")]
    EmptyErrorSequence,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
