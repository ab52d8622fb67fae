//! A loaded document: the parsed store plus everything derived from it.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::export::{export_filename, to_csv};
use crate::format::RdfFormat;
use crate::metadata::{extract_metadata, OntologyMetadata};
use crate::model::{build_element_table_model, Row, TableModel};
use crate::parser::{load_path, parse_document};
use crate::store::{MemoryStore, TripleStore};
use crate::view::{filter_and_sort_rows, SortDirection};

/// One loaded ontology document.
///
/// Metadata and the element table are computed once at load time. Loading
/// another document means building a new `OntologyDocument`.
#[derive(Debug, Clone)]
pub struct OntologyDocument {
    format: RdfFormat,
    store: MemoryStore,
    metadata: OntologyMetadata,
    model: TableModel,
}

impl OntologyDocument {
    /// Parses `text` and derives metadata and the element table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OntologyError::Parse`] if `text` is not valid `format`.
    pub fn load(text: &str, format: RdfFormat) -> Result<Self> {
        let store = parse_document(text, format)?;
        Ok(Self::from_store(store, format))
    }

    /// Reads `path` and loads it, detecting the format from the file name
    /// unless `format` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(path: &Path, format: Option<RdfFormat>) -> Result<Self> {
        let (store, format) = load_path(path, format)?;
        Ok(Self::from_store(store, format))
    }

    /// Derives metadata and the element table from an already-built store.
    #[must_use]
    pub fn from_store(store: MemoryStore, format: RdfFormat) -> Self {
        let metadata = extract_metadata(&store);
        let model = build_element_table_model(&store);
        info!(
            %format,
            quads = store.len(),
            elements = model.rows.len(),
            columns = model.column_count(),
            ontology = metadata.display_name().unwrap_or("(unnamed)"),
            "ontology document ready"
        );
        Self {
            format,
            store,
            metadata,
            model,
        }
    }

    /// Syntax the document was parsed as.
    #[must_use]
    pub fn format(&self) -> RdfFormat {
        self.format
    }

    /// The parsed statements.
    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Ontology-level metadata.
    #[must_use]
    pub fn metadata(&self) -> &OntologyMetadata {
        &self.metadata
    }

    /// The element table.
    #[must_use]
    pub fn model(&self) -> &TableModel {
        &self.model
    }

    /// Filtered and sorted rows; see [`filter_and_sort_rows`].
    #[must_use]
    pub fn view(
        &self,
        query: &str,
        sort_column: Option<usize>,
        direction: SortDirection,
    ) -> Vec<Row> {
        filter_and_sort_rows(&self.model, query, sort_column, direction)
    }

    /// CSV of `rows` under this document's headers.
    #[must_use]
    pub fn csv(&self, rows: &[Row]) -> String {
        to_csv(&self.model.headers, &self.model.keys, rows)
    }

    /// Conventional export file name at time `now`.
    #[must_use]
    pub fn export_filename(&self, now: DateTime<Utc>) -> String {
        export_filename(self.metadata.display_name(), now)
    }
}
