//! `ontoview-site` — Generates the interactive HTML viewer for an ontology.
//!
//! **Outputs (`public/`):**
//! - `index.html` — Viewer page with metadata panel and element table
//! - `data/table.json` — Table model and metadata as JSON
//! - `css/style.css` — Stylesheet (no CDN dependencies)
//! - `js/viewer.js` — Client-side filter, sort, CSV export, print
//!
//! **Usage:**
//! ```
//! ontoview-site --input <file> [--out <path>] [--config <toml>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ontoview_clients::{init_logging, InputArgs};
use ontoview_website::{config::SiteConfig, generate};

/// Generate the ontoview HTML viewer for an RDF document.
#[derive(Parser)]
#[command(
    name = "ontoview-site",
    about = "Generate an interactive HTML viewer for an ontology"
)]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    /// Output directory for the generated viewer.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Site configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.input.verbose);

    let config = SiteConfig::load(args.config.as_deref())?;
    let doc = args.input.load()?;

    generate(&doc, &config, &args.out)?;

    println!("Viewer generated successfully.");
    println!("  Ontology: {}", doc.metadata().display_name().unwrap_or("(unnamed)"));
    println!("  Elements: {}", doc.model().rows.len());
    println!("  Output:   {}", args.out.display());

    Ok(())
}
