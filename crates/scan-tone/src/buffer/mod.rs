//! Pixel storage for the tone mapping pipeline.
//!
//! [`PixelBuffer`] owns a contiguous, row-major, channel-interleaved run of
//! 8-bit samples. The layout is fixed:
//!
//! ```text
//! index(x, y, c) = (y * width + x) * channels + c
//! ```
//!
//! The first three channels are always red, green and blue. Any further
//! channel (alpha in the common RGBA case) is carried along untouched.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;
