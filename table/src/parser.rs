//! Parses RDF text into a [`MemoryStore`] using `sophia_turtle`.

use std::path::Path;

use sophia_api::quad::Quad as _;
use sophia_api::source::{QuadSource, TripleSource};
use sophia_api::term::{Term as SophiaTerm, TermKind as SophiaKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::{nq, nt, trig, turtle};
use tracing::{debug, info};

use crate::error::{OntologyError, Result};
use crate::format::{detect_rdf_format_from_filename, RdfFormat};
use crate::store::{MemoryStore, TripleStore};
use crate::term::{Literal, Quad, Term};

/// Parses `text` as `format`.
///
/// Statements using RDF-star quoted triples are skipped; everything else is
/// copied into the store in document order.
///
/// # Errors
///
/// Returns [`OntologyError::Parse`] if the parser rejects the document. No
/// partial store is returned.
pub fn parse_document(text: &str, format: RdfFormat) -> Result<MemoryStore> {
    let mut collector = Collector::default();

    let outcome = match format {
        RdfFormat::Turtle => turtle::parse_str(text)
            .for_each_triple(|t| collector.push(t.s(), t.p(), t.o(), None))
            .map_err(|e| e.to_string()),
        RdfFormat::NTriples => nt::parse_str(text)
            .for_each_triple(|t| collector.push(t.s(), t.p(), t.o(), None))
            .map_err(|e| e.to_string()),
        RdfFormat::NQuads => nq::parse_str(text)
            .for_each_quad(|q| collector.push(q.s(), q.p(), q.o(), q.g()))
            .map_err(|e| e.to_string()),
        RdfFormat::TriG => trig::parse_str(text)
            .for_each_quad(|q| collector.push(q.s(), q.p(), q.o(), q.g()))
            .map_err(|e| e.to_string()),
    };
    outcome.map_err(|message| OntologyError::Parse { format, message })?;

    debug!(
        %format,
        quads = collector.store.len(),
        skipped = collector.skipped,
        "parsed RDF document"
    );
    Ok(collector.store)
}

/// Reads and parses a file. The format is detected from the file name when
/// `format` is `None`.
///
/// # Errors
///
/// Returns [`OntologyError::Io`] if the file cannot be read, or
/// [`OntologyError::Parse`] if it is not valid RDF.
pub fn load_path(path: &Path, format: Option<RdfFormat>) -> Result<(MemoryStore, RdfFormat)> {
    let text = std::fs::read_to_string(path).map_err(|source| OntologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format =
        format.unwrap_or_else(|| detect_rdf_format_from_filename(&path.to_string_lossy()));
    let store = parse_document(&text, format)?;
    info!(path = %path.display(), %format, quads = store.len(), "loaded RDF document");
    Ok((store, format))
}

#[derive(Default)]
struct Collector {
    store: MemoryStore,
    skipped: usize,
}

impl Collector {
    fn push<T: SophiaTerm>(&mut self, s: T, p: T, o: T, g: Option<T>) {
        let converted = (convert(s), convert(p), convert(o));
        let (Some(subject), Some(predicate), Some(object)) = converted else {
            self.skipped += 1;
            return;
        };
        let graph = match g {
            Some(g) => match convert(g) {
                Some(g) => Some(g),
                None => {
                    self.skipped += 1;
                    return;
                }
            },
            None => None,
        };
        self.store.insert(Quad {
            subject,
            predicate,
            object,
            graph,
        });
    }
}

fn convert<T: SophiaTerm>(term: T) -> Option<Term> {
    match term.kind() {
        SophiaKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_string())),
        SophiaKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::BlankNode(id.as_str().to_string())),
        SophiaKind::Literal => {
            let lexical = term.lexical_form()?;
            let value = (*lexical).to_owned();
            let language = term.language_tag().map(|tag| tag.as_str().to_string());
            let datatype = term.datatype().map(|dt| dt.as_str().to_string());
            Some(Term::Literal(Literal {
                value,
                language,
                datatype,
            }))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::QuadPattern;

    const TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex: <https://example.org/> .

ex:A rdfs:label "A"@en , "A-untagged" ;
     rdfs:comment [ rdfs:label "nested" ] .
"#;

    #[test]
    fn turtle_terms_convert() {
        let store = parse_document(TTL, RdfFormat::Turtle).unwrap();
        let a = Term::iri("https://example.org/A");
        let label = Term::iri("http://www.w3.org/2000/01/rdf-schema#label");
        let labels: Vec<(String, Option<String>)> = store
            .quads_matching(QuadPattern::any().subject(&a).predicate(&label))
            .filter_map(|q| q.object.as_literal())
            .map(|lit| (lit.value.clone(), lit.language.clone()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("A".to_string(), Some("en".to_string())),
                ("A-untagged".to_string(), None),
            ]
        );
        assert!(store.quads().any(|q| matches!(q.subject, Term::BlankNode(_))));
    }

    #[test]
    fn nquads_keep_graph_names() {
        let nq = "<https://e.org/s> <https://e.org/p> \"o\" <https://e.org/g> .\n";
        let store = parse_document(nq, RdfFormat::NQuads).unwrap();
        let quad = store.quads().next().unwrap();
        assert_eq!(quad.graph, Some(Term::iri("https://e.org/g")));
    }

    #[test]
    fn malformed_turtle_is_a_parse_error() {
        let err = parse_document("<a> <b> .", RdfFormat::Turtle).unwrap_err();
        assert!(matches!(
            err,
            OntologyError::Parse {
                format: RdfFormat::Turtle,
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_path(Path::new("/nonexistent/ontology.ttl"), None).unwrap_err();
        assert!(matches!(err, OntologyError::Io { .. }));
    }
}
