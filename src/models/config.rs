use scan_tone::ToneOptions;

/// Suffix appended to the input's file stem.
pub const OUTPUT_SUFFIX: &str = "_processed";

/// Extension of the produced document.
pub const OUTPUT_EXTENSION: &str = "pdf";

/// JPEG quality used for the embedded raster (0.95 on a 0-1 scale).
pub const JPEG_QUALITY: u8 = 95;

/// Fixed settings for one pipeline run.
///
/// Nothing here is exposed on the command line; [`Default`] is the policy.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Highlight threshold and contrast factor
    pub tone: ToneOptions,

    /// Quality (1-100) for the re-encoded JPEG
    pub jpeg_quality: u8,

    /// Appended to the input file stem
    pub output_suffix: String,

    /// Extension of the output file, without the dot
    pub output_extension: String,

    /// `/Producer` entry of the PDF info dictionary
    pub producer: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tone: ToneOptions::default(),
            jpeg_quality: JPEG_QUALITY,
            output_suffix: OUTPUT_SUFFIX.to_string(),
            output_extension: OUTPUT_EXTENSION.to_string(),
            producer: format!("scanclean {}", env!("CARGO_PKG_VERSION")),
        }
    }
}
