//! Two-branch tone mapping for scanned pages.
//!
//! Scans of printed or handwritten pages tend to have an off-white, noisy
//! paper background and slightly washed-out ink. The mapper handles both in
//! a single pass:
//!
//! 1. **Highlight branch** - pixels whose gray value exceeds the threshold
//!    (default 240) are flattened to pure white, erasing paper texture.
//! 2. **Contrast branch** - every other pixel has each color channel
//!    multiplied by the contrast factor (default 1.2) and clamped to 255,
//!    pushing ink toward saturation.
//!
//! The gray value is the unweighted mean `(R + G + B) / 3` computed in
//! floating point, so a sum of 721 (gray 240.33) is a highlight while a
//! sum of 720 (gray exactly 240) is not.

mod lut;
mod mapper;
mod options;

pub use mapper::{ToneDecision, ToneMapper, ToneStats};
pub use options::{ToneOptions, CONTRAST_FACTOR, HIGHLIGHT_THRESHOLD};
