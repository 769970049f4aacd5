//! DocSage — persona-driven document section ranking.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use docsage_core::{AnalysisInput, DocsageConfig, Error};
use docsage_pipeline::DocumentAnalyst;
use docsage_source::TextDirSource;

/// Rank document sections against a persona and job-to-be-done.
#[derive(Debug, Parser)]
#[command(name = "docsage", version, about)]
struct Cli {
    /// Path to the input JSON file.
    input_file: PathBuf,
    /// Path to the output JSON file.
    output_file: PathBuf,
    /// Directory holding document text files (overrides DOCSAGE_DOCS_DIR).
    #[arg(long)]
    docs_dir: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.docs_dir {
        Some(dir) => DocsageConfig::with_docs_dir(dir),
        None => DocsageConfig::from_env(),
    };

    // Invalid input is fatal: nothing runs and no output file is written.
    let raw = fs::read_to_string(&cli.input_file)
        .map_err(|e| Error::InputFormat(format!("{}: {}", cli.input_file.display(), e)))?;
    let input: AnalysisInput = serde_json::from_str(&raw)
        .map_err(|e| Error::InputFormat(format!("{}: {}", cli.input_file.display(), e)))?;

    let analyst = DocumentAnalyst::new(TextDirSource::new(&config.docs_dir));
    let output = analyst.analyze(&input);

    // The result is fully computed before persistence; a write failure is
    // reported without discarding it.
    let rendered = serde_json::to_string_pretty(&output)?;
    fs::write(&cli.output_file, rendered)
        .map_err(|e| Error::OutputWrite(format!("{}: {}", cli.output_file.display(), e)))?;

    info!("Output saved to {}", cli.output_file.display());
    Ok(())
}
