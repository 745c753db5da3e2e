//! Assertion helpers for tests.

use image::RgbImage;
use lopdf::{Document, Object, Stream};
use pretty_assertions::assert_eq;

/// Assert bytes look like a PDF and parse them
pub fn open_pdf(bytes: &[u8]) -> Document {
    assert!(
        bytes.starts_with(b"%PDF-"),
        "Expected PDF, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    Document::load_mem(bytes).expect("PDF should parse")
}

/// Assert the document has exactly one page with MediaBox `[0 0 width height]`
pub fn assert_single_page(doc: &Document, width: i64, height: i64) {
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "Expected exactly one page");

    let page = doc.get_dictionary(pages[&1]).expect("page dictionary");
    let media_box: Vec<i64> = page
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .expect("MediaBox")
        .iter()
        .map(|o| o.as_i64().expect("integer MediaBox entry"))
        .collect();
    assert_eq!(media_box, vec![0, 0, width, height]);
}

/// All image XObject streams in the document
pub fn image_streams(doc: &Document) -> Vec<&Stream> {
    doc.objects
        .values()
        .filter_map(|obj| match obj {
            Object::Stream(s)
                if s.dict.get(b"Subtype").and_then(Object::as_name).ok() == Some(&b"Image"[..]) =>
            {
                Some(s)
            }
            _ => None,
        })
        .collect()
}

/// Assert there is exactly one DCT-encoded image of the given size and
/// decode it
pub fn assert_single_jpeg_image(doc: &Document, width: i64, height: i64) -> RgbImage {
    let images = image_streams(doc);
    assert_eq!(images.len(), 1, "Expected exactly one image object");

    let image = images[0];
    let dict = &image.dict;
    assert_eq!(dict.get(b"Filter").and_then(Object::as_name).ok(), Some(&b"DCTDecode"[..]));
    assert_eq!(dict.get(b"Width").and_then(Object::as_i64).ok(), Some(width));
    assert_eq!(dict.get(b"Height").and_then(Object::as_i64).ok(), Some(height));

    image::load_from_memory_with_format(&image.content, image::ImageFormat::Jpeg)
        .expect("embedded JPEG should decode")
        .to_rgb8()
}

/// Assert every channel of `actual` is within `tolerance` of `expected`
/// (JPEG is lossy)
pub fn assert_rgb_close(actual: [u8; 3], expected: [u8; 3], tolerance: u8) {
    for c in 0..3 {
        assert!(
            actual[c].abs_diff(expected[c]) <= tolerance,
            "Channel {c}: expected {:?} ± {tolerance}, got {:?}",
            expected,
            actual
        );
    }
}
