//! PixelBuffer struct with layout-checked construction.

use super::BufferError;

/// A decoded image held as interleaved 8-bit samples.
///
/// # Example
///
/// ```
/// use scan_tone::PixelBuffer;
///
/// let data = vec![250, 250, 250, 255, 10, 10, 10, 255];
/// let buffer = PixelBuffer::new(data, 2, 1, 4).unwrap();
///
/// assert_eq!(buffer.width(), 2);
/// assert_eq!(buffer.height(), 1);
/// assert_eq!(buffer.pixel(1, 0), &[10, 10, 10, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Samples in row-major order, `channels` per pixel.
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl PixelBuffer {
    /// Wrap `data` as a `width` x `height` image with `channels` samples per pixel.
    ///
    /// Fails unless `data.len() == width * height * channels` and
    /// `channels >= 3`.
    pub fn new(
        data: Vec<u8>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, BufferError> {
        if channels < 3 {
            return Err(BufferError::TooFewChannels(channels));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(channels))
            .ok_or(BufferError::Overflow)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Wrap RGBA samples (4 channels per pixel).
    #[inline]
    pub fn from_rgba(data: Vec<u8>, width: usize, height: usize) -> Result<Self, BufferError> {
        Self::new(data, width, height, 4)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Offset of the first sample of pixel `(x, y)`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `(x, y)` lies inside the image.
    #[inline]
    pub fn pixel_index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        (y * self.width + x) * self.channels
    }

    /// Samples of pixel `(x, y)`, `channels` long.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = self.pixel_index(x, y);
        &self.data[start..start + self.channels]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view over all pixels, one chunk per pixel.
    pub(crate) fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(self.channels)
    }

    /// Give up the sample vector.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
