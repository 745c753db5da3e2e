use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

use crate::error::EncodingError;
use crate::rendering::EncodedRaster;

/// Resource name of the page's only image.
const IMAGE_NAME: &[u8] = b"Im0";

/// Builds a one-page PDF whose only content is a single embedded raster.
///
/// The page is sized to the raster in pixels (1 px = 1 pt, no DPI scaling)
/// and the image is drawn at the origin filling the page exactly. The object
/// graph is:
///
/// ```text
/// trailer -> Catalog -> Pages (Count 1) -> Page -> Contents (q W 0 0 H 0 0 cm /Im0 Do Q)
///                                                  Resources/XObject/Im0 -> Image (DCTDecode)
/// trailer -> Info (Producer)
/// ```
///
/// No timestamps or document IDs are written, so the same raster always
/// serializes to the same bytes.
pub struct DocumentAssembler {
    producer: String,
}

impl DocumentAssembler {
    pub fn new(producer: impl Into<String>) -> Self {
        Self {
            producer: producer.into(),
        }
    }

    /// Build the document object graph for `raster`.
    pub fn assemble(&self, raster: &EncodedRaster) -> Result<Document, EncodingError> {
        let filter = validate(raster)?;
        let (width, height) = (i64::from(raster.width()), i64::from(raster.height()));

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let image = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width,
                "Height" => height,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
                "Filter" => filter,
            },
            raster.bytes().to_vec(),
        );
        let image_id = doc.add_object(image);

        let content = placement(width, height)
            .encode()
            .map_err(|e| EncodingError::Serialize(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0_i64.into(), 0_i64.into(), width.into(), height.into()],
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    IMAGE_NAME => image_id,
                },
            },
            "Contents" => content_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1_i64,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = self.add_info(&mut doc);

        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        tracing::debug!(
            width,
            height,
            image_len = raster.bytes().len(),
            objects = doc.objects.len(),
            "Assembled single-page document"
        );

        Ok(doc)
    }

    /// Assemble and serialize in one step.
    pub fn to_bytes(&self, raster: &EncodedRaster) -> Result<Vec<u8>, EncodingError> {
        let mut doc = self.assemble(raster)?;
        serialize(&mut doc)
    }

    fn add_info(&self, doc: &mut Document) -> ObjectId {
        doc.add_object(dictionary! {
            "Producer" => Object::string_literal(self.producer.as_str()),
        })
    }
}

/// Write `doc` out as a classic (xref table) PDF.
pub fn serialize(doc: &mut Document) -> Result<Vec<u8>, EncodingError> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| EncodingError::Serialize(e.to_string()))?;
    Ok(bytes)
}

/// Check that `raster` can be embedded verbatim and return its PDF filter.
fn validate(raster: &EncodedRaster) -> Result<&'static str, EncodingError> {
    if raster.bytes().is_empty() {
        return Err(EncodingError::EmptyRaster);
    }
    if raster.width() == 0 || raster.height() == 0 {
        return Err(EncodingError::InvalidDimensions {
            width: raster.width(),
            height: raster.height(),
        });
    }
    match raster.format().pdf_filter() {
        Some(filter) if raster.has_valid_signature() => Ok(filter),
        _ => Err(EncodingError::UnsupportedFormat(raster.format())),
    }
}

/// `q W 0 0 H 0 0 cm /Im0 Do Q`: map the unit square onto the full page.
fn placement(width: i64, height: i64) -> Content {
    Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    width.into(),
                    0_i64.into(),
                    0_i64.into(),
                    height.into(),
                    0_i64.into(),
                    0_i64.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.to_vec())]),
            Operation::new("Q", vec![]),
        ],
    }
}
