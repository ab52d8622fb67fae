//! Error type for loading and parsing RDF documents.

use std::path::PathBuf;

use crate::format::RdfFormat;

/// Failures surfaced while turning a document into a table model.
///
/// Everything downstream of a successful parse is total, so the only
/// failures are reading the input and the parser rejecting it.
#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    /// The input file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The RDF parser rejected the document.
    #[error("failed to parse {format} document: {message}")]
    Parse {
        /// Format the document was parsed as.
        format: RdfFormat,
        /// Parser diagnostic.
        message: String,
    },

    /// A media type outside the four supported RDF syntaxes.
    #[error("unsupported RDF media type: {0}")]
    UnknownMediaType(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, OntologyError>;
