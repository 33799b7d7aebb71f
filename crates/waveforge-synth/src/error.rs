//! Error types for the synthesis engine.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during sound generation.
///
/// All failures are local and synchronous; operations are deterministic
/// and idempotent, so a failed call can simply be retried by the caller
/// with no engine-side state to reset.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Negative or non-finite duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Buffers of unequal length were passed to the mixer.
    #[error("length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch {
        /// Length of the first buffer.
        expected: usize,
        /// Length of the offending buffer.
        found: usize,
    },

    /// The destination file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
