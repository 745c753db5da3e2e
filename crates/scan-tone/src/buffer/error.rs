//! Error type for [`PixelBuffer`](super::PixelBuffer) construction.

use std::fmt;

/// Reasons a byte vector cannot be wrapped as a [`PixelBuffer`](super::PixelBuffer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Sample count does not equal `width * height * channels`.
    LengthMismatch {
        /// Required number of samples.
        expected: usize,
        /// Number of samples supplied.
        actual: usize,
    },
    /// Fewer than the three color channels the tone mapper reads.
    TooFewChannels(usize),
    /// `width * height * channels` does not fit in `usize`.
    Overflow,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::LengthMismatch { expected, actual } => write!(
                f,
                "buffer length mismatch: expected {} samples, got {}",
                expected, actual
            ),
            BufferError::TooFewChannels(n) => {
                write!(f, "at least 3 channels required, got {}", n)
            }
            BufferError::Overflow => write!(f, "buffer dimensions overflow"),
        }
    }
}

impl std::error::Error for BufferError {}
