//! Tone mapping options.
//!
//! This module provides the [`ToneOptions`] struct holding the two policy
//! constants of the tone mapper.

/// Gray level above which a pixel is flattened to pure white.
pub const HIGHLIGHT_THRESHOLD: f32 = 240.0;

/// Multiplier applied to each color channel of non-highlight pixels.
pub const CONTRAST_FACTOR: f32 = 1.2;

/// Configuration for [`ToneMapper`](super::ToneMapper).
///
/// # Defaults
///
/// - Highlight threshold: 240 (on the 0-255 gray scale, strict `>`)
/// - Contrast factor: 1.2
///
/// # Example
///
/// ```
/// use scan_tone::ToneOptions;
///
/// let options = ToneOptions::new();
/// assert_eq!(options.highlight_threshold, 240.0);
///
/// let options = ToneOptions::new().highlight_threshold(230.0).contrast(1.5);
/// assert_eq!(options.contrast, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneOptions {
    /// Gray values strictly above this become white.
    pub highlight_threshold: f32,

    /// Channel multiplier for everything else, clamped to 255.
    pub contrast: f32,
}

impl Default for ToneOptions {
    fn default() -> Self {
        Self {
            highlight_threshold: HIGHLIGHT_THRESHOLD,
            contrast: CONTRAST_FACTOR,
        }
    }
}

impl ToneOptions {
    /// Create options with the fixed scan-cleanup policy.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the highlight threshold.
    #[inline]
    pub fn highlight_threshold(mut self, threshold: f32) -> Self {
        self.highlight_threshold = threshold;
        self
    }

    /// Set the contrast multiplier.
    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = factor;
        self
    }
}
