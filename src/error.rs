use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::rendering::RasterFormat;

/// Pipeline stage a failure belongs to, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Input,
    Read,
    Decode,
    Encode,
    Assemble,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Input => "input",
            Stage::Read => "read",
            Stage::Decode => "decode",
            Stage::Encode => "encode",
            Stage::Assemble => "assemble",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Missing input image path")]
    MissingArgument,

    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// The stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::MissingArgument | PipelineError::InputNotFound(_) => Stage::Input,
            PipelineError::Read { .. } => Stage::Read,
            PipelineError::Decode(_) => Stage::Decode,
            PipelineError::Encoding(e) => e.stage(),
            PipelineError::Write { .. } => Stage::Write,
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("JPEG encode error: {0}")]
    Jpeg(String),

    #[error("Encoded raster is empty")]
    EmptyRaster,

    #[error("Unsupported dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Raster format {0} cannot be embedded without re-encoding")]
    UnsupportedFormat(RasterFormat),

    #[error("PDF serialize error: {0}")]
    Serialize(String),
}

impl EncodingError {
    fn stage(&self) -> Stage {
        match self {
            EncodingError::Jpeg(_) => Stage::Encode,
            _ => Stage::Assemble,
        }
    }
}
