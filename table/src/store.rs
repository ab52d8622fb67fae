//! The triple store capability and its in-memory implementation.
//!
//! Everything above this module reads statements through [`TripleStore`],
//! so a caller can hand in any backend that can enumerate quads.

use std::collections::HashMap;

use crate::term::{Quad, Term};

/// Which graphs a [`QuadPattern`] accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphMatch<'a> {
    /// Any graph, default or named.
    #[default]
    Any,
    /// Only the default graph.
    Default,
    /// Only the given named graph.
    Named(&'a Term),
}

/// A (subject, predicate, object, graph) pattern; `None` positions are wildcards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadPattern<'a> {
    /// Subject constraint.
    pub subject: Option<&'a Term>,
    /// Predicate constraint.
    pub predicate: Option<&'a Term>,
    /// Object constraint.
    pub object: Option<&'a Term>,
    /// Graph constraint.
    pub graph: GraphMatch<'a>,
}

impl<'a> QuadPattern<'a> {
    /// The all-wildcard pattern.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Constrains the subject.
    #[must_use]
    pub fn subject(mut self, subject: &'a Term) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Constrains the predicate.
    #[must_use]
    pub fn predicate(mut self, predicate: &'a Term) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Constrains the object.
    #[must_use]
    pub fn object(mut self, object: &'a Term) -> Self {
        self.object = Some(object);
        self
    }

    /// Constrains the graph.
    #[must_use]
    pub fn graph(mut self, graph: GraphMatch<'a>) -> Self {
        self.graph = graph;
        self
    }

    /// Returns true if `quad` satisfies every constrained position.
    #[must_use]
    pub fn matches(&self, quad: &Quad) -> bool {
        let position = |want: Option<&Term>, have: &Term| want.map_or(true, |w| w == have);
        let graph_ok = match self.graph {
            GraphMatch::Any => true,
            GraphMatch::Default => quad.graph.is_none(),
            GraphMatch::Named(g) => quad.graph.as_ref() == Some(g),
        };
        graph_ok
            && position(self.subject, &quad.subject)
            && position(self.predicate, &quad.predicate)
            && position(self.object, &quad.object)
    }
}

/// Read access to a set of quads.
pub trait TripleStore {
    /// Every quad in the store, in insertion order.
    fn quads(&self) -> Box<dyn Iterator<Item = &Quad> + '_>;

    /// Quads matching `pattern`, in insertion order.
    ///
    /// The default implementation scans [`TripleStore::quads`].
    fn quads_matching<'a>(
        &'a self,
        pattern: QuadPattern<'a>,
    ) -> Box<dyn Iterator<Item = &'a Quad> + 'a> {
        Box::new(self.quads().filter(move |q| pattern.matches(q)))
    }

    /// Number of quads held.
    fn len(&self) -> usize {
        self.quads().count()
    }

    /// Returns true if the store holds no quads.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A vector-backed store with a subject index.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    quads: Vec<Quad>,
    by_subject: HashMap<Term, Vec<usize>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a quad.
    pub fn insert(&mut self, quad: Quad) {
        let position = self.quads.len();
        self.by_subject
            .entry(quad.subject.clone())
            .or_default()
            .push(position);
        self.quads.push(quad);
    }

    /// Appends a default-graph triple.
    pub fn insert_triple(&mut self, subject: Term, predicate: Term, object: Term) {
        self.insert(Quad::triple(subject, predicate, object));
    }

    /// Number of distinct subjects.
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.by_subject.len()
    }
}

impl FromIterator<Quad> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        for quad in iter {
            store.insert(quad);
        }
        store
    }
}

impl TripleStore for MemoryStore {
    fn quads(&self) -> Box<dyn Iterator<Item = &Quad> + '_> {
        Box::new(self.quads.iter())
    }

    fn quads_matching<'a>(
        &'a self,
        pattern: QuadPattern<'a>,
    ) -> Box<dyn Iterator<Item = &'a Quad> + 'a> {
        match pattern.subject {
            Some(subject) => {
                let positions = self.by_subject.get(subject).map_or(&[][..], Vec::as_slice);
                Box::new(
                    positions
                        .iter()
                        .filter_map(move |&i| self.quads.get(i))
                        .filter(move |q| pattern.matches(q)),
                )
            }
            None => Box::new(self.quads.iter().filter(move |q| pattern.matches(q))),
        }
    }

    fn len(&self) -> usize {
        self.quads.len()
    }
}
