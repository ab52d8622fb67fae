//! `ontoview-inspect` — Prints an ontology's metadata, the known vocabularies
//! it uses, and its table shape as JSON.
//!
//! **Usage:**
//! ```
//! ontoview-inspect --input <file> [--rows]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::Result;
use clap::Parser;
use ontoview_clients::{init_logging, InputArgs};
use ontoview_table::{OntologyMetadata, Row, TripleStore};
use ontoview_vocab::{Namespace, NAMESPACES};
use serde::Serialize;

/// Print metadata and element-table summary for an RDF document.
#[derive(Parser)]
#[command(
    name = "ontoview-inspect",
    about = "Print ontology metadata and element table summary as JSON"
)]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    /// Include every row in the output.
    #[arg(long)]
    rows: bool,
}

/// JSON report written to stdout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    media_type: &'static str,
    quad_count: usize,
    metadata: &'a OntologyMetadata,
    namespaces: Vec<&'static Namespace>,
    headers: &'a [String],
    keys: &'a [String],
    row_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<&'a [Row]>,
}

/// Known namespaces that some subject, predicate or object IRI falls in.
fn namespaces_in_use(store: &impl TripleStore) -> Vec<&'static Namespace> {
    NAMESPACES
        .iter()
        .filter(|ns| {
            store.quads().any(|q| {
                [&q.subject, &q.predicate, &q.object]
                    .into_iter()
                    .filter_map(|t| t.as_iri())
                    .any(|iri| ns.local_name(iri).is_some())
            })
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.input.verbose);

    let doc = args.input.load()?;
    let model = doc.model();
    let report = Report {
        media_type: doc.format().media_type(),
        quad_count: doc.store().len(),
        metadata: doc.metadata(),
        namespaces: namespaces_in_use(doc.store()),
        headers: &model.headers,
        keys: &model.keys,
        row_count: model.rows.len(),
        rows: args.rows.then_some(model.rows.as_slice()),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
