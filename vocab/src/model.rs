//! Namespace model type.

/// A vocabulary namespace known to the viewer (e.g., `rdfs:`, `skos:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Namespace {
    /// The CURIE prefix (e.g., `"rdfs"`).
    pub prefix: &'static str,
    /// The full IRI of the namespace (e.g., `"http://www.w3.org/2000/01/rdf-schema#"`).
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

impl Namespace {
    /// Builds the full IRI for a local name in this namespace.
    #[must_use]
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.iri, local)
    }

    /// Returns the local part of `iri` if it lies in this namespace.
    #[must_use]
    pub fn local_name<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.iri)
    }
}
