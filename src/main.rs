use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scanclean::error::PipelineError;
use scanclean::services::{PipelineOutcome, ProcessingPipeline};

#[derive(Parser)]
#[command(name = "scanclean", version)]
#[command(about = "Whiten the background of a scanned page, boost its contrast and save it as a PDF")]
struct Cli {
    /// Input image (PNG, JPEG, TIFF, ...). The PDF is written next to it
    /// as <name>_processed.pdf
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scanclean=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let outcome = run(cli.input).map_err(|e| {
        if matches!(e, PipelineError::MissingArgument) {
            eprintln!("Usage: scanclean <input-image-path>");
        }
        let stage = e.stage();
        anyhow::Error::new(e).context(format!("{stage} stage failed"))
    })?;

    println!("Processed PDF saved to: {}", outcome.output_path.display());

    Ok(())
}

fn run(input: Option<PathBuf>) -> Result<PipelineOutcome, PipelineError> {
    let input = input.ok_or(PipelineError::MissingArgument)?;
    let outcome = ProcessingPipeline::default().run(&input)?;

    tracing::debug!(
        width = outcome.width,
        height = outcome.height,
        highlights = outcome.stats.highlights,
        boosted = outcome.stats.boosted,
        "Processed image"
    );

    Ok(outcome)
}
