//! Data layer of the ontoview ontology viewer.
//!
//! Turns an RDF document into two plain values: the ontology's descriptive
//! [`OntologyMetadata`] and a [`TableModel`] with one row per class,
//! property, or named individual. Parsing is delegated to `sophia_turtle`;
//! everything after that reads through the [`TripleStore`] trait.
//!
//! # Entry Point
//!
//! ```
//! use ontoview_table::{OntologyDocument, RdfFormat, SortDirection};
//!
//! let ttl = r#"
//!     @prefix owl:  <http://www.w3.org/2002/07/owl#> .
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     <https://example.org/onto> a owl:Ontology ; rdfs:label "Example" .
//!     <https://example.org/Cat> a owl:Class ; rdfs:label "Cat" .
//! "#;
//! let doc = OntologyDocument::load(ttl, RdfFormat::Turtle).unwrap();
//! assert_eq!(doc.metadata().display_name(), Some("Example"));
//! assert_eq!(doc.model().rows.len(), 1);
//!
//! let rows = doc.view("cat", Some(1), SortDirection::Ascending);
//! let csv = doc.csv(&rows);
//! assert!(csv.starts_with("iri,label,type"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! text ──parser──▶ MemoryStore ──metadata──▶ OntologyMetadata
//!                             └─model─────▶ TableModel ──view──▶ rows ──export──▶ CSV
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod accessors;
pub mod classify;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod literal;
pub mod metadata;
pub mod model;
pub mod parser;
pub mod store;
pub mod term;
pub mod view;

pub use document::OntologyDocument;
pub use error::OntologyError;
pub use export::{export_filename, model_to_csv, to_csv, to_pascal_case};
pub use format::{detect_rdf_format_from_filename, RdfFormat};
pub use metadata::{extract_metadata, OntologyMetadata};
pub use model::{build_element_table_model, Row, TableModel};
pub use parser::{load_path, parse_document};
pub use store::{MemoryStore, QuadPattern, TripleStore};
pub use term::{Literal, Quad, Term};
pub use view::{filter_and_sort_rows, SortDirection};
