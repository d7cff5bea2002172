//! Error types and result definitions for seqtools.
//!
//! Every argument check happens when an adapter is constructed, never at
//! first iteration, so misuse surfaces at the call site:
//! - Stride requires `step >= 1`
//! - Fixed-count chunking requires `size >= 1`
//! - Windows require `size >= 1`
//! - Sampling requires `count` no larger than the source length

use thiserror::Error;

/// The result type used by every fallible operation in this crate.
pub type SeqResult<T> = Result<T, SeqError>;

/// Argument validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// Stride constructed with a step of zero.
    #[error("invalid stride: step must be at least 1, got {step}")]
    InvalidStep {
        /// The rejected step value.
        step: usize,
    },

    /// Fixed-count chunking constructed with a chunk size of zero.
    #[error("invalid chunking: chunk size must be at least 1, got {size}")]
    InvalidChunkSize {
        /// The rejected chunk size.
        size: usize,
    },

    /// Sliding window constructed with a window size of zero.
    #[error("invalid window: window size must be at least 1, got {size}")]
    InvalidWindowSize {
        /// The rejected window size.
        size: usize,
    },

    /// Sample count exceeds the number of elements the source produced.
    #[error("sample of {requested} elements requested from a sequence of length {len}")]
    SampleTooLarge {
        /// The requested sample size.
        requested: usize,
        /// The actual source length.
        len: usize,
    },
}

impl SeqError {
    /// Create an invalid-step error.
    #[must_use]
    pub fn invalid_step(step: usize) -> Self {
        Self::InvalidStep { step }
    }

    /// Create an invalid-chunk-size error.
    #[must_use]
    pub fn invalid_chunk_size(size: usize) -> Self {
        Self::InvalidChunkSize { size }
    }

    /// Create an invalid-window-size error.
    #[must_use]
    pub fn invalid_window_size(size: usize) -> Self {
        Self::InvalidWindowSize { size }
    }

    /// Create a sample-too-large error.
    #[must_use]
    pub fn sample_too_large(requested: usize, len: usize) -> Self {
        Self::SampleTooLarge { requested, len }
    }
}
