//! Per-pixel tone mapping.
//!
//! [`ToneMapper`] classifies every pixel by its unweighted gray value and
//! rewrites its RGB channels in place. Extra channels pass through.

use super::lut::ContrastLut;
use super::ToneOptions;
use crate::buffer::PixelBuffer;

/// Branch taken for a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneDecision {
    /// Gray value above the threshold: flatten to pure white.
    Highlight,
    /// Everything else: multiply each channel by the contrast factor.
    Normal,
}

/// Per-branch pixel counts from one [`ToneMapper::apply`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToneStats {
    /// Pixels flattened to white.
    pub highlights: usize,
    /// Pixels that went through the contrast boost.
    pub boosted: usize,
}

impl ToneStats {
    /// Total pixels visited.
    #[inline]
    pub fn total(&self) -> usize {
        self.highlights + self.boosted
    }
}

/// Highlight suppression plus contrast boost for scanned pages.
///
/// The rule for each pixel, using its RGB values *before* any rewrite:
///
/// ```text
/// gray = (R + G + B) / 3
/// gray >  threshold  ->  R = G = B = 255
/// gray <= threshold  ->  C = min(255, round(C * contrast))   for C in R, G, B
/// ```
///
/// The mapping is not idempotent: a pixel boosted on one pass can cross the
/// threshold and flip to white on a second pass. Apply it once.
///
/// # Example
///
/// ```
/// use scan_tone::{PixelBuffer, ToneMapper};
///
/// let mut buffer =
///     PixelBuffer::from_rgba(vec![250, 250, 250, 255, 10, 10, 10, 255], 2, 1).unwrap();
/// let stats = ToneMapper::new().apply(&mut buffer);
///
/// assert_eq!(buffer.as_bytes(), &[255, 255, 255, 255, 12, 12, 12, 255]);
/// assert_eq!(stats.highlights, 1);
/// assert_eq!(stats.boosted, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ToneMapper {
    options: ToneOptions,
    lut: ContrastLut,
}

impl ToneMapper {
    /// Create a mapper with the default scan-cleanup policy.
    pub fn new() -> Self {
        Self::with_options(ToneOptions::default())
    }

    pub fn with_options(options: ToneOptions) -> Self {
        Self {
            lut: ContrastLut::new(options.contrast),
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> &ToneOptions {
        &self.options
    }

    /// Decide which branch a pixel with these channel values takes.
    #[inline]
    pub fn classify(&self, r: u8, g: u8, b: u8) -> ToneDecision {
        let gray = (f32::from(r) + f32::from(g) + f32::from(b)) / 3.0;
        if gray > self.options.highlight_threshold {
            ToneDecision::Highlight
        } else {
            ToneDecision::Normal
        }
    }

    /// Map one RGB triple, returning the new values and the branch taken.
    #[inline]
    pub fn map_rgb(&self, rgb: [u8; 3]) -> ([u8; 3], ToneDecision) {
        let [r, g, b] = rgb;
        match self.classify(r, g, b) {
            ToneDecision::Highlight => ([255, 255, 255], ToneDecision::Highlight),
            ToneDecision::Normal => (
                [self.lut.get(r), self.lut.get(g), self.lut.get(b)],
                ToneDecision::Normal,
            ),
        }
    }

    /// Rewrite every pixel of `buffer` in place.
    pub fn apply(&self, buffer: &mut PixelBuffer) -> ToneStats {
        let mut stats = ToneStats::default();

        for pixel in buffer.pixels_mut() {
            // Copy out first so the gray value never sees a half-written pixel.
            let rgb = [pixel[0], pixel[1], pixel[2]];
            let (mapped, decision) = self.map_rgb(rgb);
            pixel[..3].copy_from_slice(&mapped);

            match decision {
                ToneDecision::Highlight => stats.highlights += 1,
                ToneDecision::Normal => stats.boosted += 1,
            }
        }

        stats
    }
}

impl Default for ToneMapper {
    fn default() -> Self {
        Self::new()
    }
}
