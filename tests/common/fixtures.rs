//! Test fixtures and constants.

use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// RGBA pixels used by the end-to-end scenarios
pub mod pixels {
    /// Near-white paper background (gray 250)
    pub const PAPER: [u8; 4] = [250, 250, 250, 255];

    /// Dark ink (gray 10, boosted to 12)
    pub const INK: [u8; 4] = [10, 10, 10, 255];

    pub const WHITE: [u8; 4] = [255, 255, 255, 255];

    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
}

/// Encode `pixels` (row-major, `width` per row) in the given format.
pub fn encode(pixels: &[[u8; 4]], width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    let img = RgbaImage::from_raw(width, height, data).expect("pixel count matches dimensions");
    let mut out = Vec::new();
    match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => image::DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .write_to(&mut Cursor::new(&mut out), format),
        _ => img.write_to(&mut Cursor::new(&mut out), format),
    }
    .expect("encode fixture");
    out
}

pub fn png(pixels: &[[u8; 4]], width: u32, height: u32) -> Vec<u8> {
    encode(pixels, width, height, ImageFormat::Png)
}

/// A `width` x `height` image filled with one color
pub fn solid_png(color: [u8; 4], width: u32, height: u32) -> Vec<u8> {
    png(&vec![color; (width * height) as usize], width, height)
}

/// A page-like image: paper background with a dark band across the middle
pub fn page_png(width: u32, height: u32) -> Vec<u8> {
    let pixels: Vec<[u8; 4]> = (0..height)
        .flat_map(|y| {
            (0..width).map(move |_| {
                if y >= height / 3 && y < 2 * height / 3 {
                    pixels::INK
                } else {
                    pixels::PAPER
                }
            })
        })
        .collect();
    png(&pixels, width, height)
}
