pub mod document;
pub mod raster;

pub use document::DocumentAssembler;
pub use raster::{EncodedRaster, RasterFormat};
