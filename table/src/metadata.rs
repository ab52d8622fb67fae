//! Ontology-level descriptive metadata.

use ontoview_vocab::iris::{dc, dcterms, owl, rdf, rdfs, skos};
use serde::Serialize;
use tracing::debug;

use crate::accessors::{preferred_iri, preferred_literal};
use crate::store::{QuadPattern, TripleStore};
use crate::term::Term;

/// Predicates tried, in order, for the ontology name.
pub const NAME_PREDICATES: &[&str] = &[rdfs::LABEL, dcterms::TITLE, dc::TITLE];
/// Predicates tried, in order, for the version IRI.
pub const VERSION_IRI_PREDICATES: &[&str] = &[owl::VERSION_IRI, dcterms::HAS_VERSION];
/// Predicates tried, in order, for the version string.
pub const VERSION_INFO_PREDICATES: &[&str] = &[owl::VERSION_INFO, dcterms::HAS_VERSION];
/// Predicates tried, in order, for the description.
pub const DESCRIPTION_PREDICATES: &[&str] =
    &[skos::DEFINITION, dcterms::DESCRIPTION, dc::DESCRIPTION];
/// Predicates tried, in order, for the license IRI.
pub const LICENSE_PREDICATES: &[&str] = &[
    dcterms::LICENSE,
    dcterms::RIGHTS,
    dc::RIGHTS,
    dcterms::ACCESS_RIGHTS,
];
/// Predicates tried, in order, for the rights holder.
pub const RIGHTS_HOLDER_PREDICATES: &[&str] = &[dcterms::RIGHTS_HOLDER];

/// Descriptive fields of the document's `owl:Ontology` resource.
///
/// Every field is `None` when the document declares no ontology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyMetadata {
    /// IRI of the `owl:Ontology` subject.
    pub ontology_iri: Option<String>,
    /// Display name.
    pub ontology_name: Option<String>,
    /// Version IRI.
    pub version_iri: Option<String>,
    /// Version string.
    pub version_info: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// License (or rights) IRI.
    pub license: Option<String>,
    /// Rights holder.
    pub rights_holder: Option<String>,
}

impl OntologyMetadata {
    /// The name to show for the ontology, if it has one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.ontology_name.as_deref()
    }

    /// Returns true if no `owl:Ontology` subject was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ontology_iri.is_none()
    }

    /// Label/value pairs for the fields that are present, in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Ontology IRI", &self.ontology_iri),
            ("Name", &self.ontology_name),
            ("Version IRI", &self.version_iri),
            ("Version", &self.version_info),
            ("Description", &self.description),
            ("License", &self.license),
            ("Rights holder", &self.rights_holder),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

/// The first IRI subject typed `owl:Ontology`, in store order.
pub fn find_ontology_subject<S>(store: &S) -> Option<String>
where
    S: TripleStore + ?Sized,
{
    let rdf_type = Term::iri(rdf::TYPE);
    let ontology = Term::iri(owl::ONTOLOGY);
    let subject = store
        .quads_matching(QuadPattern::any().predicate(&rdf_type).object(&ontology))
        .find_map(|q| q.subject.as_iri())
        .map(str::to_string);
    subject
}

/// Builds the metadata record for the document held by `store`.
pub fn extract_metadata<S>(store: &S) -> OntologyMetadata
where
    S: TripleStore + ?Sized,
{
    let Some(iri) = find_ontology_subject(store) else {
        debug!("no owl:Ontology subject found");
        return OntologyMetadata::default();
    };

    let metadata = OntologyMetadata {
        ontology_name: preferred_literal(store, &iri, NAME_PREDICATES),
        version_iri: preferred_iri(store, &iri, VERSION_IRI_PREDICATES),
        version_info: preferred_literal(store, &iri, VERSION_INFO_PREDICATES),
        description: preferred_literal(store, &iri, DESCRIPTION_PREDICATES),
        license: preferred_iri(store, &iri, LICENSE_PREDICATES),
        rights_holder: preferred_literal(store, &iri, RIGHTS_HOLDER_PREDICATES),
        ontology_iri: Some(iri),
    };
    debug!(
        ontology = ?metadata.ontology_iri,
        name = ?metadata.ontology_name,
        "extracted ontology metadata"
    );
    metadata
}
