use std::path::{Path, PathBuf};

use scan_tone::{ToneMapper, ToneStats};

use crate::error::PipelineError;
use crate::models::{output_path_for, PipelineConfig};
use crate::rendering::{raster, DocumentAssembler};

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Where the PDF was written
    pub output_path: PathBuf,
    /// Page (and image) width in pixels
    pub width: u32,
    /// Page (and image) height in pixels
    pub height: u32,
    /// Per-branch pixel counts from the tone mapper
    pub stats: ToneStats,
    /// Size of the written PDF
    pub bytes_written: usize,
}

/// Pipeline that orchestrates decode → tone map → encode → assemble → write
///
/// Every stage consumes the complete output of the previous one. The
/// destination file is only touched once the whole PDF is in memory, so a
/// failing run never leaves a partial file behind.
pub struct ProcessingPipeline {
    config: PipelineConfig,
    mapper: ToneMapper,
    assembler: DocumentAssembler,
}

impl ProcessingPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            mapper: ToneMapper::with_options(config.tone),
            assembler: DocumentAssembler::new(config.producer.clone()),
            config,
        }
    }

    /// Where `run` would write the PDF for `input`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        output_path_for(
            input,
            &self.config.output_suffix,
            &self.config.output_extension,
        )
    }

    /// Process the image at `input` and write the PDF next to it.
    pub fn run(&self, input: &Path) -> Result<PipelineOutcome, PipelineError> {
        if !input.exists() {
            return Err(PipelineError::InputNotFound(input.to_path_buf()));
        }

        let source = std::fs::read(input).map_err(|source| PipelineError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let pdf = self.process_bytes(&source)?;

        let output_path = self.output_path(input);
        std::fs::write(&output_path, &pdf.bytes).map_err(|source| PipelineError::Write {
            path: output_path.clone(),
            source,
        })?;

        tracing::info!(
            input = %input.display(),
            output = %output_path.display(),
            bytes = pdf.bytes.len(),
            "Wrote processed PDF"
        );

        Ok(PipelineOutcome {
            output_path,
            width: pdf.width,
            height: pdf.height,
            stats: pdf.stats,
            bytes_written: pdf.bytes.len(),
        })
    }

    /// Run every in-memory stage on an encoded image, returning the PDF bytes.
    pub fn process_bytes(&self, source: &[u8]) -> Result<ProcessedDocument, PipelineError> {
        let mut buffer = raster::decode(source)?;

        tracing::debug!(
            width = buffer.width(),
            height = buffer.height(),
            input_len = source.len(),
            "Decoded input image"
        );

        let stats = self.mapper.apply(&mut buffer);

        tracing::debug!(
            highlights = stats.highlights,
            boosted = stats.boosted,
            "Tone mapping applied"
        );

        let encoded = raster::encode_jpeg(&buffer, self.config.jpeg_quality)?;
        drop(buffer);

        let bytes = self.assembler.to_bytes(&encoded)?;

        Ok(ProcessedDocument {
            bytes,
            width: encoded.width(),
            height: encoded.height(),
            stats,
        })
    }
}

impl Default for ProcessingPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

/// Serialized PDF plus what went into it
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stats: ToneStats,
}
