//! scan-tone: highlight flattening and contrast boost for scanned pages
//!
//! This library owns the pixel side of the scan cleanup pipeline: a
//! layout-checked [`PixelBuffer`] and the [`ToneMapper`] that rewrites it.
//! Decoding and encoding image files is left to the caller.
//!
//! # Quick Start
//!
//! ```
//! use scan_tone::{PixelBuffer, ToneMapper};
//!
//! // 1x1 black pixel, fully opaque
//! let mut buffer = PixelBuffer::from_rgba(vec![0, 0, 0, 255], 1, 1).unwrap();
//! ToneMapper::new().apply(&mut buffer);
//!
//! assert_eq!(buffer.as_bytes(), &[0, 0, 0, 255]);
//! ```

pub mod buffer;
pub mod tone;


pub use buffer::{BufferError, PixelBuffer};
pub use tone::{
    ToneDecision, ToneMapper, ToneOptions, ToneStats, CONTRAST_FACTOR, HIGHLIGHT_THRESHOLD,
};
