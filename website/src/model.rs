//! Data model types for the viewer generator.

use ontoview_table::{OntologyMetadata, SortDirection, TableModel};
use serde::Serialize;

/// A breadcrumb navigation item.
#[derive(Debug, Serialize)]
pub struct BreadcrumbItem {
    /// Display label.
    pub label: String,
    /// URL (empty for the current page).
    pub url: String,
}

/// A navigation item (possibly with children).
#[derive(Debug, Serialize)]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// URL (empty string if this is a group heading).
    pub url: String,
    /// Child items.
    pub children: Vec<NavItem>,
}

/// Initial sort state handed to the client script.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SortState {
    /// Column index, or `None` for document order.
    pub column: Option<usize>,
    /// Direction.
    pub direction: SortDirection,
}

/// Everything the client script needs, serialized as JSON into the page
/// and into `data/table.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerPayload<'a> {
    /// Media type the document was parsed as.
    pub media_type: &'static str,
    /// Ontology metadata.
    pub metadata: &'a OntologyMetadata,
    /// Element table.
    pub model: &'a TableModel,
    /// Initial sort.
    pub sort: SortState,
}
