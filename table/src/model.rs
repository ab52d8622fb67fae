//! The element table: column definitions, rows, and the model builder.

use indexmap::{IndexMap, IndexSet};
use ontoview_vocab::iris::{cco, cco2, dc, dcterms, obo, rdf, rdfs, skos};
use serde::Serialize;
use tracing::debug;

use crate::accessors::{iri_set, literal_set, preferred_iri, preferred_literal, value_set};
use crate::classify::is_ontology_element;
use crate::store::TripleStore;
use crate::term::Term;

/// Key of the subject IRI column; always first and never pruned.
pub const IRI_KEY: &str = "iri";

/// Separator used when a column holds several values.
pub const VALUE_SEPARATOR: &str = "; ";

/// How a column turns the subject's statements into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// One literal, by predicate order then language preference.
    PreferredLiteral,
    /// One IRI, by predicate order.
    PreferredIri,
    /// All literals.
    LiteralSet,
    /// All IRIs.
    IriSet,
    /// All literals and IRIs.
    ValueSet,
}

/// A data column of the element table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Field identifier used in rows.
    pub key: &'static str,
    /// Display header.
    pub header: &'static str,
    /// Accessor kind.
    pub kind: ValueKind,
    /// Candidate predicates, highest priority first.
    pub predicates: &'static [&'static str],
}

impl Column {
    /// Computes this column's cell for `subject`.
    pub fn evaluate<S>(&self, store: &S, subject: &str) -> String
    where
        S: TripleStore + ?Sized,
    {
        let predicates = self.predicates;
        match self.kind {
            ValueKind::PreferredLiteral => {
                preferred_literal(store, subject, predicates).unwrap_or_default()
            }
            ValueKind::PreferredIri => {
                preferred_iri(store, subject, predicates).unwrap_or_default()
            }
            ValueKind::LiteralSet => literal_set(store, subject, predicates).join(VALUE_SEPARATOR),
            ValueKind::IriSet => iri_set(store, subject, predicates).join(VALUE_SEPARATOR),
            ValueKind::ValueSet => value_set(store, subject, predicates).join(VALUE_SEPARATOR),
        }
    }
}

/// The data columns after `iri`, in display order.
pub const COLUMNS: &[Column] = &[
    Column {
        key: "label",
        header: "label",
        kind: ValueKind::PreferredLiteral,
        predicates: &[rdfs::LABEL, dcterms::TITLE, dc::TITLE],
    },
    Column {
        key: "type",
        header: "type",
        kind: ValueKind::IriSet,
        predicates: &[rdf::TYPE],
    },
    Column {
        key: "definition",
        header: "definition",
        kind: ValueKind::PreferredLiteral,
        predicates: &[skos::DEFINITION, obo::DEFINITION, cco::DEFINITION],
    },
    Column {
        key: "preferredLabel",
        header: "preferred label",
        kind: ValueKind::PreferredLiteral,
        predicates: &[skos::PREF_LABEL, obo::EDITOR_PREFERRED_TERM],
    },
    Column {
        key: "alternativeLabel",
        header: "alternative label",
        kind: ValueKind::LiteralSet,
        predicates: &[skos::ALT_LABEL, obo::ALTERNATIVE_TERM, cco::ALTERNATIVE_LABEL],
    },
    Column {
        key: "acronym",
        header: "acronym",
        kind: ValueKind::LiteralSet,
        predicates: &[cco::ACRONYM, obo::ABBREVIATION, cco2::ACRONYM],
    },
    Column {
        key: "subClassOf",
        header: "rdfs:subClassOf",
        kind: ValueKind::IriSet,
        predicates: &[rdfs::SUB_CLASS_OF],
    },
    Column {
        key: "subPropertyOf",
        header: "rdfs:subPropertyOf",
        kind: ValueKind::IriSet,
        predicates: &[rdfs::SUB_PROPERTY_OF],
    },
    Column {
        key: "definitionSource",
        header: "definition source",
        kind: ValueKind::ValueSet,
        predicates: &[
            dcterms::BIBLIOGRAPHIC_CITATION,
            obo::DEFINITION_SOURCE,
            cco2::DEFINITION_SOURCE,
            cco::DEFINITION_SOURCE,
            cco2::DOCTRINAL_SOURCE,
            cco::DOCTRINAL_SOURCE,
        ],
    },
    Column {
        key: "isCuratedIn",
        header: "is curated in",
        kind: ValueKind::PreferredIri,
        predicates: &[cco2::IS_CURATED_IN, rdfs::IS_DEFINED_BY],
    },
];

/// One table row: field key to cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, String>);

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// The cell for `key`, if the row has that key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The cell for `key`, or `""` when absent.
    #[must_use]
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Field keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Cell values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Drops every key not in `keep`.
    pub fn retain_keys(&mut self, keep: &[String]) {
        self.0.retain(|k, _| keep.iter().any(|kept| kept == k));
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Headers, aligned keys, and rows of the element table.
///
/// `headers[i]` labels `keys[i]`; `keys[0]` is always [`IRI_KEY`]; every row
/// has exactly the keys in `keys`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableModel {
    /// Display headers.
    pub headers: Vec<String>,
    /// Field keys, aligned with `headers`.
    pub keys: Vec<String>,
    /// One row per ontology element.
    pub rows: Vec<Row>,
}

impl TableModel {
    /// Resolves a column index to its key.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Index of the column with `key`.
    #[must_use]
    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Distinct IRI subjects in first-appearance order.
fn iri_subjects<S>(store: &S) -> IndexSet<&str>
where
    S: TripleStore + ?Sized,
{
    store.quads().filter_map(|q| q.subject.as_iri()).collect()
}

/// Builds the element table for the document held by `store`.
///
/// Every IRI subject that passes [`is_ontology_element`] yields one row.
/// Columns other than `iri` whose cells are all blank are dropped.
pub fn build_element_table_model<S>(store: &S) -> TableModel
where
    S: TripleStore + ?Sized,
{
    let subjects = iri_subjects(store);
    let candidates = subjects.len();

    let mut rows: Vec<Row> = subjects
        .into_iter()
        .filter(|iri| is_ontology_element(store, &Term::iri(*iri)))
        .map(|iri| {
            let mut row = Row::new();
            row.insert(IRI_KEY, iri);
            for column in COLUMNS {
                row.insert(column.key, column.evaluate(store, iri));
            }
            row
        })
        .collect();

    let mut headers = vec![IRI_KEY.to_string()];
    let mut keys = vec![IRI_KEY.to_string()];
    for column in COLUMNS {
        let populated = rows.iter().any(|r| !r.value(column.key).trim().is_empty());
        if populated {
            headers.push(column.header.to_string());
            keys.push(column.key.to_string());
        }
    }
    for row in &mut rows {
        row.retain_keys(&keys);
    }

    debug!(
        subjects = candidates,
        elements = rows.len(),
        columns = keys.len(),
        "built element table model"
    );
    TableModel {
        headers,
        keys,
        rows,
    }
}
