//! Decides which subjects are ontology elements worth a table row.

use ontoview_vocab::iris::{owl, rdf};

use crate::store::{QuadPattern, TripleStore};
use crate::term::Term;

/// Declared types that make a subject an ontology element.
pub const ELEMENT_TYPES: &[&str] = &[
    owl::CLASS,
    owl::NAMED_INDIVIDUAL,
    owl::OBJECT_PROPERTY,
    owl::DATATYPE_PROPERTY,
    owl::ANNOTATION_PROPERTY,
];

/// Returns true if `subject` is an IRI with at least one `rdf:type` in
/// [`ELEMENT_TYPES`]. Blank nodes and literals are never elements.
pub fn is_ontology_element<S>(store: &S, subject: &Term) -> bool
where
    S: TripleStore + ?Sized,
{
    if subject.as_iri().is_none() {
        return false;
    }
    let rdf_type = Term::iri(rdf::TYPE);
    let mut types = store
        .quads_matching(QuadPattern::any().subject(subject).predicate(&rdf_type))
        .filter_map(|q| q.object.as_iri());
    types.any(|t| ELEMENT_TYPES.contains(&t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn typed(subject: Term, ty: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert_triple(subject, Term::iri(rdf::TYPE), Term::iri(ty));
        store
    }

    #[test]
    fn every_element_type_qualifies() {
        for ty in ELEMENT_TYPES {
            let s = Term::iri("https://example.org/x");
            assert!(is_ontology_element(&typed(s.clone(), ty), &s), "{ty}");
        }
    }

    #[test]
    fn other_types_do_not_qualify() {
        let s = Term::iri("https://example.org/x");
        assert!(!is_ontology_element(&typed(s.clone(), owl::ONTOLOGY), &s));
        let untyped = Term::iri("https://example.org/y");
        assert!(!is_ontology_element(&MemoryStore::new(), &untyped));
    }

    #[test]
    fn blank_nodes_never_qualify() {
        let b = Term::blank("b0");
        assert!(!is_ontology_element(&typed(b.clone(), owl::CLASS), &b));
    }
}
