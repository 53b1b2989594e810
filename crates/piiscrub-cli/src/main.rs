//! piiscrub — scan delimited records for PII and write a redacted copy.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod pipeline;

const USAGE: &str = "\
Usage: piiscrub <input.csv>

Reads rows of (record_id, data_json), redacts PII in each JSON payload and
writes rows of (record_id, redacted_data_json, is_pii) to redacted_output.csv
in the current directory. Set PIISCRUB_OUTPUT to write elsewhere.";

fn resolve_output_path() -> PathBuf {
    std::env::var("PIISCRUB_OUTPUT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("redacted_output.csv"))
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() == 2 && (args[1] == "--help" || args[1] == "-h") {
        println!("{USAGE}");
        return Ok(());
    }
    if args.len() != 2 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let input = PathBuf::from(&args[1]);
    let output = resolve_output_path();
    let summary = pipeline::run(&input, &output)?;
    info!(
        rows = summary.rows,
        flagged = summary.flagged,
        unparsed = summary.unparsed,
        "wrote {}",
        output.display()
    );
    Ok(())
}
