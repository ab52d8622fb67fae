//! Read-only lookups over a [`TripleStore`] for one subject and an ordered
//! list of candidate predicates.
//!
//! Single-value lookups try predicates in order and stop at the first one
//! that yields a value. Set lookups take the union over all predicates,
//! de-duplicated in first-seen order. Blank-node objects are never returned.

use indexmap::IndexSet;

use crate::literal::select_literal;
use crate::store::{QuadPattern, TripleStore};
use crate::term::{Literal, Quad, Term};

/// All quads whose subject is `subject`, in any graph.
pub fn subject_triples<'a, S>(store: &'a S, subject: &'a Term) -> Vec<&'a Quad>
where
    S: TripleStore + ?Sized,
{
    store
        .quads_matching(QuadPattern::any().subject(subject))
        .collect()
}

/// Objects of `(subject, predicate, *)`.
fn objects<'a, S>(
    store: &'a S,
    subject: &'a Term,
    predicate: &'a Term,
) -> impl Iterator<Item = &'a Term> + 'a
where
    S: TripleStore + ?Sized,
{
    store
        .quads_matching(QuadPattern::any().subject(subject).predicate(predicate))
        .map(|q| &q.object)
}

/// The language-preferred literal of the first predicate that has any literal.
pub fn preferred_literal<S>(store: &S, subject: &str, predicates: &[&str]) -> Option<String>
where
    S: TripleStore + ?Sized,
{
    let subject = Term::iri(subject);
    predicates.iter().find_map(|p| {
        let predicate = Term::iri(*p);
        let literals: Vec<&Literal> = objects(store, &subject, &predicate)
            .filter_map(Term::as_literal)
            .collect();
        select_literal(literals).map(|l| l.value.clone())
    })
}

/// The first IRI object of the first predicate that has one.
pub fn preferred_iri<S>(store: &S, subject: &str, predicates: &[&str]) -> Option<String>
where
    S: TripleStore + ?Sized,
{
    let subject = Term::iri(subject);
    predicates.iter().find_map(|p| {
        let predicate = Term::iri(*p);
        let iri = objects(store, &subject, &predicate)
            .find_map(Term::as_iri)
            .map(str::to_string);
        iri
    })
}

/// Union of values over all predicates, keeping objects accepted by `keep`.
fn collect_set<S, F>(store: &S, subject: &str, predicates: &[&str], keep: F) -> Vec<String>
where
    S: TripleStore + ?Sized,
    F: Fn(&Term) -> bool,
{
    let subject = Term::iri(subject);
    let mut values = IndexSet::new();
    for p in predicates {
        let predicate = Term::iri(*p);
        for object in objects(store, &subject, &predicate).filter(|o| keep(o)) {
            values.insert(object.value().to_string());
        }
    }
    values.into_iter().collect()
}

/// Every literal value over all predicates.
pub fn literal_set<S>(store: &S, subject: &str, predicates: &[&str]) -> Vec<String>
where
    S: TripleStore + ?Sized,
{
    collect_set(store, subject, predicates, |o| matches!(o, Term::Literal(_)))
}

/// Every IRI value over all predicates.
pub fn iri_set<S>(store: &S, subject: &str, predicates: &[&str]) -> Vec<String>
where
    S: TripleStore + ?Sized,
{
    collect_set(store, subject, predicates, |o| matches!(o, Term::Iri(_)))
}

/// Every literal or IRI value over all predicates.
pub fn value_set<S>(store: &S, subject: &str, predicates: &[&str]) -> Vec<String>
where
    S: TripleStore + ?Sized,
{
    collect_set(store, subject, predicates, |o| {
        matches!(o, Term::Literal(_) | Term::Iri(_))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const S: &str = "https://example.org/S";
    const P1: &str = "https://example.org/p1";
    const P2: &str = "https://example.org/p2";

    fn store(objects: &[(&str, Term)]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for (p, o) in objects {
            store.insert_triple(Term::iri(S), Term::iri(*p), o.clone());
        }
        store
    }

    #[test]
    fn preferred_literal_respects_predicate_order() {
        let store = store(&[
            (P2, Term::lang_literal("second", "en")),
            (P1, Term::lang_literal("first", "fr")),
        ]);
        assert_eq!(
            preferred_literal(&store, S, &[P1, P2]).as_deref(),
            Some("first")
        );
        assert_eq!(
            preferred_literal(&store, S, &[P2, P1]).as_deref(),
            Some("second")
        );
    }

    #[test]
    fn preferred_literal_skips_predicates_without_literals() {
        let store = store(&[(P1, Term::iri("https://x")), (P2, Term::literal("lit"))]);
        assert_eq!(preferred_literal(&store, S, &[P1, P2]).as_deref(), Some("lit"));
    }

    #[test]
    fn preferred_iri_ignores_blank_nodes_and_literals() {
        let store = store(&[
            (P1, Term::blank("b0")),
            (P1, Term::literal("nope")),
            (P2, Term::iri("https://target")),
        ]);
        assert_eq!(
            preferred_iri(&store, S, &[P1, P2]).as_deref(),
            Some("https://target")
        );
    }

    #[test]
    fn sets_deduplicate_across_predicates() {
        let store = store(&[
            (P1, Term::literal("a")),
            (P2, Term::literal("a")),
            (P2, Term::literal("b")),
            (P1, Term::iri("https://i")),
            (P2, Term::blank("b1")),
        ]);
        assert_eq!(literal_set(&store, S, &[P1, P2]), vec!["a", "b"]);
        assert_eq!(iri_set(&store, S, &[P1, P2]), vec!["https://i"]);
        assert_eq!(
            value_set(&store, S, &[P1, P2]),
            vec!["a", "https://i", "b"]
        );
    }

    #[test]
    fn unknown_subject_is_empty() {
        let store = store(&[(P1, Term::literal("a"))]);
        assert_eq!(preferred_literal(&store, "https://other", &[P1]), None);
        assert!(literal_set(&store, "https://other", &[P1]).is_empty());
        let other = Term::iri("https://other");
        assert!(subject_triples(&store, &other).is_empty());
    }
}
