//! Owned RDF terms and quads.
//!
//! These are the values the in-memory store holds once the parser has run.
//! Quoted triples and variables never reach this layer.

use std::fmt;

/// The kind tag of a [`Term`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// A named resource.
    Iri,
    /// An anonymous resource.
    BlankNode,
    /// A literal value.
    Literal,
}

/// A literal value with an optional language tag and datatype IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Language tag, if any (never empty).
    pub language: Option<String>,
    /// Datatype IRI, if the parser reported one.
    pub datatype: Option<String>,
}

impl Literal {
    /// A plain literal with no language tag.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// A language-tagged literal. An empty tag is treated as no tag.
    pub fn tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        let language: String = language.into();
        Self {
            value: value.into(),
            language: (!language.is_empty()).then_some(language),
            datatype: None,
        }
    }

    /// Returns true if the literal carries the given language tag (ASCII case-insensitive).
    #[must_use]
    pub fn has_language(&self, tag: &str) -> bool {
        self.language
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case(tag))
    }
}

/// An RDF term as stored in a [`crate::store::MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A named resource.
    Iri(String),
    /// An anonymous resource, identified by its document-local label.
    BlankNode(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// An IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// A blank node term.
    pub fn blank(id: impl Into<String>) -> Self {
        Term::BlankNode(id.into())
    }

    /// A plain literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal::plain(value))
    }

    /// A language-tagged literal term.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal(Literal::tagged(value, language))
    }

    /// The kind tag of this term.
    #[must_use]
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// The IRI, if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The literal, if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The string value: IRI text, blank node label, or lexical form.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(v) | Term::BlankNode(v) => v,
            Term::Literal(lit) => &lit.value,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(id) => write!(f, "_:{id}"),
            Term::Literal(lit) => {
                write!(f, "{:?}", lit.value)?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{lang}")?;
                } else if let Some(dt) = &lit.datatype {
                    write!(f, "^^<{dt}>")?;
                }
                Ok(())
            }
        }
    }
}

/// A statement, optionally placed in a named graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    /// Subject (IRI or blank node).
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: Term,
    /// Object.
    pub object: Term,
    /// Named graph, or `None` for the default graph.
    pub graph: Option<Term>,
}

impl Quad {
    /// A statement in the default graph.
    pub fn triple(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph: None,
        }
    }

    /// Moves this statement into a named graph.
    #[must_use]
    pub fn in_graph(mut self, graph: Term) -> Self {
        self.graph = Some(graph);
        self
    }
}
