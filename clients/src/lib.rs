//! Shared plumbing for the ontoview client binaries: input arguments and
//! log setup.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use ontoview_table::{OntologyDocument, RdfFormat};
use tracing_subscriber::EnvFilter;

/// Arguments every client takes to locate and parse its input document.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// RDF document to load (.ttl, .n3, .nt, .nq, .trig).
    #[arg(long, short)]
    pub input: PathBuf,

    /// Media type or short name overriding extension-based detection
    /// (e.g. `text/turtle`, `nq`).
    #[arg(long)]
    pub format: Option<RdfFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl InputArgs {
    /// Loads and parses the input document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid RDF.
    pub fn load(&self) -> Result<OntologyDocument> {
        OntologyDocument::open(&self.input, self.format)
            .with_context(|| format!("Cannot load ontology from {}", self.input.display()))
    }
}

/// Destination of a CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvTarget {
    /// Write to standard output.
    Stdout,
    /// Write to this file.
    File(PathBuf),
}

/// Resolves the `--out` argument of `ontoview-csv`.
///
/// `-` means stdout. An existing directory receives `filename`, and any
/// other path is used as given. Without `--out`, `filename` is written to
/// the current directory.
pub fn resolve_csv_target(out: Option<&Path>, filename: &str) -> CsvTarget {
    match out {
        Some(path) if path.as_os_str() == "-" => CsvTarget::Stdout,
        Some(path) if path.is_dir() => CsvTarget::File(path.join(filename)),
        Some(path) => CsvTarget::File(path.to_path_buf()),
        None => CsvTarget::File(PathBuf::from(filename)),
    }
}

/// Installs a stderr `tracing` subscriber. `RUST_LOG` wins over the
/// verbosity count when set.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("warning: keeping the existing log subscriber: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "AnimalOntology-2024-05-01T12-30-45.000Z.csv";

    #[test]
    fn dash_means_stdout() {
        assert_eq!(resolve_csv_target(Some(Path::new("-")), NAME), CsvTarget::Stdout);
    }

    #[test]
    fn directory_gets_conventional_name() {
        let dir = std::env::temp_dir();
        assert_eq!(
            resolve_csv_target(Some(dir.as_path()), NAME),
            CsvTarget::File(dir.join(NAME))
        );
    }

    #[test]
    fn file_path_used_as_given() {
        let file = std::env::temp_dir().join("ontoview-missing-dir").join("export.csv");
        assert_eq!(
            resolve_csv_target(Some(file.as_path()), NAME),
            CsvTarget::File(file.clone())
        );
    }

    #[test]
    fn absent_out_writes_to_current_directory() {
        assert_eq!(
            resolve_csv_target(None, NAME),
            CsvTarget::File(PathBuf::from(NAME))
        );
    }

    #[test]
    fn second_logging_install_is_harmless() {
        init_logging(0);
        init_logging(2);
        tracing::info!("still logging");
    }
}
