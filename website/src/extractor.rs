//! Builds the page model from a loaded [`OntologyDocument`].

use ontoview_table::{OntologyDocument, OntologyMetadata, Row};

use crate::config::SiteConfig;
use crate::model::{SortState, ViewerPayload};

/// Heading used when the document declares no ontology name.
pub const UNNAMED_ONTOLOGY: &str = "Untitled ontology";

/// One line of the metadata panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    /// Field label.
    pub label: &'static str,
    /// Field value.
    pub value: String,
    /// Whether the value is an IRI to link.
    pub is_iri: bool,
}

/// Heading for the page: the ontology name, else its IRI, else a placeholder.
pub fn ontology_heading(metadata: &OntologyMetadata) -> String {
    metadata
        .display_name()
        .or(metadata.ontology_iri.as_deref())
        .unwrap_or(UNNAMED_ONTOLOGY)
        .to_string()
}

/// Metadata panel entries for the fields that are present.
pub fn metadata_entries(metadata: &OntologyMetadata) -> Vec<MetadataEntry> {
    metadata
        .fields()
        .into_iter()
        .map(|(label, value)| MetadataEntry {
            label,
            value: value.to_string(),
            is_iri: looks_like_iri(value),
        })
        .collect()
}

/// Initial sort from the config, ignoring a column the table does not have.
pub fn initial_sort(doc: &OntologyDocument, config: &SiteConfig) -> SortState {
    let column = config
        .default_sort_column
        .filter(|&i| i < doc.model().column_count());
    SortState {
        column,
        direction: config.default_sort_direction,
    }
}

/// Rows in their initial display order.
pub fn initial_rows(doc: &OntologyDocument, sort: SortState) -> Vec<Row> {
    doc.view("", sort.column, sort.direction)
}

/// The JSON payload for the client script.
pub fn viewer_payload(doc: &OntologyDocument, sort: SortState) -> ViewerPayload<'_> {
    ViewerPayload {
        media_type: doc.format().media_type(),
        metadata: doc.metadata(),
        model: doc.model(),
        sort,
    }
}

/// Returns true for absolute `http(s)`/`urn` identifiers.
pub fn looks_like_iri(value: &str) -> bool {
    ["http://", "https://", "urn:"]
        .iter()
        .any(|scheme| value.starts_with(scheme))
        && !value.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_fallbacks() {
        let mut metadata = OntologyMetadata::default();
        assert_eq!(ontology_heading(&metadata), UNNAMED_ONTOLOGY);
        metadata.ontology_iri = Some("https://example.org/o".to_string());
        assert_eq!(ontology_heading(&metadata), "https://example.org/o");
        metadata.ontology_name = Some("O".to_string());
        assert_eq!(ontology_heading(&metadata), "O");
    }

    #[test]
    fn entries_mark_iris() {
        let metadata = OntologyMetadata {
            ontology_iri: Some("https://example.org/o".to_string()),
            rights_holder: Some("Example Org".to_string()),
            ..OntologyMetadata::default()
        };
        let entries = metadata_entries(&metadata);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_iri);
        assert!(!entries[1].is_iri);
    }

    #[test]
    fn iri_detection() {
        assert!(looks_like_iri("urn:isbn:123"));
        assert!(!looks_like_iri("Linnaeus 1758"));
        assert!(!looks_like_iri("https://a b"));
    }
}
