pub mod pipeline;

pub use pipeline::{PipelineOutcome, ProcessedDocument, ProcessingPipeline};
