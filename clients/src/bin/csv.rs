//! `ontoview-csv` — Exports an ontology's element table as CSV.
//!
//! Rows can be filtered and sorted exactly as in the viewer. Without
//! `--out`, or when `--out` names a directory, the file is named after the
//! ontology with a timestamp (`AnimalOntology-2024-05-01T12-30-45.123Z.csv`).
//! `--out -` writes to stdout.
//!
//! **Usage:**
//! ```
//! ontoview-csv --input <file> [--query <text>] [--sort-column <n>] [--direction asc|desc] [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ontoview_clients::{init_logging, resolve_csv_target, CsvTarget, InputArgs};
use ontoview_table::SortDirection;
use tracing::info;

/// Export the element table of an RDF document as CSV.
#[derive(Parser)]
#[command(name = "ontoview-csv", about = "Export an ontology's element table as CSV")]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    /// Keep only rows with a cell containing this text (case-insensitive).
    #[arg(long, short, default_value = "")]
    query: String,

    /// Zero-based column index to sort by (0 is the IRI column).
    #[arg(long)]
    sort_column: Option<usize>,

    /// Sort direction.
    #[arg(long, default_value = "asc")]
    direction: SortDirection,

    /// Output file, directory, or `-` for stdout.
    #[arg(long, short)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.input.verbose);

    let doc = args.input.load()?;
    let rows = doc.view(&args.query, args.sort_column, args.direction);
    let csv = doc.csv(&rows);

    let filename = doc.export_filename(chrono::Utc::now());
    let target = match resolve_csv_target(args.out.as_deref(), &filename) {
        CsvTarget::Stdout => {
            println!("{csv}");
            return Ok(());
        }
        CsvTarget::File(path) => path,
    };

    std::fs::write(&target, &csv)
        .with_context(|| format!("Cannot write file: {}", target.display()))?;
    info!(path = %target.display(), rows = rows.len(), "wrote CSV export");

    println!("Exported {} of {} elements.", rows.len(), doc.model().rows.len());
    println!("  Output: {}", target.display());

    Ok(())
}
