//! Vocabulary table for the ontoview workspace.
//!
//! The `ontoview-vocab` crate holds the namespaces the viewer understands
//! (RDF, RDFS, OWL, XSD, SKOS, Dublin Core terms and elements, OBO, and both
//! Common Core Ontologies namespaces) as static data, together with the IRI
//! constants used by the table builder and helpers that convert between full
//! IRIs and CURIEs.
//!
//! # Entry Point
//!
//! ```
//! use ontoview_vocab::{expand, shorten, iris::rdfs};
//!
//! assert_eq!(shorten(rdfs::LABEL), "rdfs:label");
//! assert_eq!(expand("rdfs:label").as_deref(), Some(rdfs::LABEL));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod iris;
pub mod model;

pub use model::Namespace;

/// Every namespace known to the viewer, in display order.
pub const NAMESPACES: &[Namespace] = &[
    Namespace {
        prefix: "rdf",
        iri: iris::rdf::NS,
        label: "RDF",
    },
    Namespace {
        prefix: "rdfs",
        iri: iris::rdfs::NS,
        label: "RDF Schema",
    },
    Namespace {
        prefix: "owl",
        iri: iris::owl::NS,
        label: "OWL 2",
    },
    Namespace {
        prefix: "xsd",
        iri: iris::xsd::NS,
        label: "XML Schema Datatypes",
    },
    Namespace {
        prefix: "skos",
        iri: iris::skos::NS,
        label: "SKOS Core",
    },
    Namespace {
        prefix: "dcterms",
        iri: iris::dcterms::NS,
        label: "Dublin Core Terms",
    },
    Namespace {
        prefix: "dc",
        iri: iris::dc::NS,
        label: "Dublin Core Elements 1.1",
    },
    Namespace {
        prefix: "obo",
        iri: iris::obo::NS,
        label: "OBO Foundry",
    },
    Namespace {
        prefix: "cco",
        iri: iris::cco::NS,
        label: "Common Core Ontologies (legacy)",
    },
    Namespace {
        prefix: "cco2",
        iri: iris::cco2::NS,
        label: "Common Core Ontologies",
    },
];

/// Looks up a namespace by its CURIE prefix.
#[must_use]
pub fn namespace_for_prefix(prefix: &str) -> Option<&'static Namespace> {
    NAMESPACES.iter().find(|ns| ns.prefix == prefix)
}

/// Expands a CURIE such as `skos:prefLabel` into its full IRI.
///
/// Returns `None` when the string has no colon or the prefix is unknown.
#[must_use]
pub fn expand(curie: &str) -> Option<String> {
    let (prefix, local) = curie.split_once(':')?;
    namespace_for_prefix(prefix).map(|ns| ns.term(local))
}

/// Shortens a full IRI to `prefix:local` form.
///
/// The longest matching namespace IRI wins. IRIs outside every known
/// namespace are returned unchanged.
#[must_use]
pub fn shorten(iri: &str) -> String {
    NAMESPACES
        .iter()
        .filter(|ns| iri.starts_with(ns.iri))
        .max_by_key(|ns| ns.iri.len())
        .and_then(|ns| ns.local_name(iri).map(|local| format!("{}:{}", ns.prefix, local)))
        .unwrap_or_else(|| iri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_unique() {
        let mut seen = std::collections::HashSet::new();
        for ns in NAMESPACES {
            assert!(seen.insert(ns.prefix), "Duplicate prefix: {}", ns.prefix);
        }
    }

    #[test]
    fn namespace_iris_end_with_separator() {
        for ns in NAMESPACES {
            assert!(
                ns.iri.ends_with('#') || ns.iri.ends_with('/'),
                "Namespace {} does not end with # or /",
                ns.iri
            );
        }
    }

    #[test]
    fn shorten_known_iris() {
        assert_eq!(shorten(iris::owl::CLASS), "owl:Class");
        assert_eq!(shorten(iris::obo::DEFINITION), "obo:IAO_0000115");
        assert_eq!(shorten(iris::cco2::IS_CURATED_IN), "cco2:ont00001760");
        assert_eq!(shorten(iris::dc::TITLE), "dc:title");
    }

    #[test]
    fn shorten_leaves_unknown_iris() {
        assert_eq!(
            shorten("https://example.org/onto#Thing"),
            "https://example.org/onto#Thing"
        );
    }

    #[test]
    fn expand_round_trips_known_prefixes() {
        for ns in NAMESPACES {
            let curie = format!("{}:Example", ns.prefix);
            let full = expand(&curie);
            assert_eq!(full.as_deref(), Some(ns.term("Example").as_str()));
            assert_eq!(shorten(&ns.term("Example")), curie);
        }
    }

    #[test]
    fn expand_rejects_unknown() {
        assert_eq!(expand("foaf:Person"), None);
        assert_eq!(expand("label"), None);
    }
}
