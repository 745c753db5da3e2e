use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use scan_tone::PixelBuffer;
use std::fmt;

use crate::error::{EncodingError, PipelineError};

/// JPEG start-of-image marker.
const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// Compression format of an [`EncodedRaster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    /// Baseline DCT (JPEG), embeddable in PDF as-is via `/DCTDecode`.
    Jpeg,
    Png,
}

impl RasterFormat {
    /// PDF stream filter that decodes this format natively, if any.
    pub fn pdf_filter(self) -> Option<&'static str> {
        match self {
            RasterFormat::Jpeg => Some("DCTDecode"),
            RasterFormat::Png => None,
        }
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterFormat::Jpeg => f.write_str("JPEG"),
            RasterFormat::Png => f.write_str("PNG"),
        }
    }
}

/// A compressed image plus the pixel dimensions it declares.
#[derive(Debug, Clone)]
pub struct EncodedRaster {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
    format: RasterFormat,
}

impl EncodedRaster {
    pub fn new(bytes: Vec<u8>, width: u32, height: u32, format: RasterFormat) -> Self {
        Self {
            bytes,
            width,
            height,
            format,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> RasterFormat {
        self.format
    }

    /// Whether the payload starts with the marker its format requires.
    pub fn has_valid_signature(&self) -> bool {
        match self.format {
            RasterFormat::Jpeg => self.bytes.starts_with(&JPEG_SOI),
            RasterFormat::Png => self.bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        }
    }
}

/// Decode any format the `image` crate recognizes into an RGBA buffer.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, PipelineError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| PipelineError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    PixelBuffer::from_rgba(rgba.into_raw(), width as usize, height as usize)
        .map_err(|e| PipelineError::Decode(e.to_string()))
}

/// Encode `buffer` as a JPEG at `quality` (1-100).
///
/// JPEG has no alpha channel, so any fourth channel is composited against
/// white first.
pub fn encode_jpeg(buffer: &PixelBuffer, quality: u8) -> Result<EncodedRaster, EncodingError> {
    let width = u32::try_from(buffer.width()).unwrap_or(u32::MAX);
    let height = u32::try_from(buffer.height()).unwrap_or(u32::MAX);
    if width == 0 || height == 0 {
        return Err(EncodingError::InvalidDimensions { width, height });
    }

    let rgb = flatten_to_rgb(buffer);

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .encode(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodingError::Jpeg(e.to_string()))?;

    tracing::debug!(
        width,
        height,
        quality,
        jpeg_len = bytes.len(),
        "Encoded JPEG"
    );

    Ok(EncodedRaster::new(bytes, width, height, RasterFormat::Jpeg))
}

/// Drop everything but RGB, alpha-compositing against white when a fourth
/// channel is present.
fn flatten_to_rgb(buffer: &PixelBuffer) -> Vec<u8> {
    let channels = buffer.channels();
    let mut rgb = Vec::with_capacity(buffer.pixel_count() * 3);

    for pixel in buffer.as_bytes().chunks_exact(channels) {
        let (r, g, b) = (pixel[0], pixel[1], pixel[2]);
        let a = if channels >= 4 { pixel[3] } else { 255 };
        if a == 255 {
            rgb.extend_from_slice(&[r, g, b]);
        } else if a == 0 {
            rgb.extend_from_slice(&[255, 255, 255]);
        } else {
            let af = a as u16;
            let over_white = |c: u8| ((c as u16 * af + 255 * (255 - af)) / 255) as u8;
            rgb.extend_from_slice(&[over_white(r), over_white(g), over_white(b)]);
        }
    }

    rgb
}
