pub mod config;
pub mod output_path;

pub use config::PipelineConfig;
pub use output_path::output_path_for;
