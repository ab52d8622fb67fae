//! End-to-end tests: fixture documents through parsing, metadata, table
//! model, filter/sort, and CSV export.

use std::path::PathBuf;

use ontoview_table::{
    detect_rdf_format_from_filename, OntologyDocument, RdfFormat, SortDirection,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn animals() -> OntologyDocument {
    OntologyDocument::open(&fixture("animals.ttl"), None).expect("fixture parses")
}

#[test]
fn metadata_from_turtle() {
    let doc = animals();
    let meta = doc.metadata();
    assert_eq!(meta.ontology_iri.as_deref(), Some("https://example.org/animals"));
    assert_eq!(meta.ontology_name.as_deref(), Some("Animal ontology"));
    assert_eq!(meta.version_iri.as_deref(), Some("https://example.org/animals/1.2.0"));
    assert_eq!(meta.version_info.as_deref(), Some("1.2.0"));
    assert_eq!(meta.description.as_deref(), Some("A small ontology of animals."));
    assert_eq!(
        meta.license.as_deref(),
        Some("https://creativecommons.org/licenses/by/4.0/")
    );
    assert_eq!(meta.rights_holder.as_deref(), Some("Example Zoo"));
}

#[test]
fn elements_and_columns() {
    let doc = animals();
    let model = doc.model();
    let iris: Vec<&str> = model.rows.iter().map(|r| r.value("iri")).collect();
    assert_eq!(
        iris,
        vec![
            "https://example.org/animals/Animal",
            "https://example.org/animals/Cat",
            "https://example.org/animals/Zebra",
            "https://example.org/animals/eats",
            "https://example.org/animals/felix",
        ]
    );
    assert_eq!(
        model.keys,
        vec![
            "iri",
            "label",
            "type",
            "definition",
            "alternativeLabel",
            "subClassOf",
            "subPropertyOf",
            "definitionSource",
            "isCuratedIn",
        ]
    );
    assert_eq!(model.headers[5], "rdfs:subClassOf");
}

#[test]
fn cell_values() {
    let doc = animals();
    let model = doc.model();
    let cat = &model.rows[1];
    assert_eq!(cat.value("label"), "Cat");
    assert_eq!(cat.value("alternativeLabel"), "Kitty; Housecat");
    assert_eq!(cat.value("subClassOf"), "https://example.org/animals/Animal");
    assert_eq!(
        cat.value("definitionSource"),
        "Linnaeus 1758; https://example.org/refs/felis"
    );

    let zebra = &model.rows[2];
    assert_eq!(zebra.value("definition"), "An African equine with stripes.");
    assert_eq!(zebra.value("subClassOf"), "https://example.org/animals/Animal");

    let felix = &model.rows[4];
    assert_eq!(
        felix.value("type"),
        "http://www.w3.org/2002/07/owl#NamedIndividual; https://example.org/animals/Cat"
    );
    assert_eq!(model.rows[0].value("isCuratedIn"), "https://example.org/animals");
}

#[test]
fn view_and_export() {
    let doc = animals();
    let rows = doc.view("", Some(1), SortDirection::Descending);
    let labels: Vec<&str> = rows.iter().map(|r| r.value("label")).collect();
    assert_eq!(labels, vec!["Zebra", "Felix \"the\" Cat", "eats", "Cat", "Animal"]);

    let rows = doc.view("felix", None, SortDirection::Ascending);
    let csv = doc.csv(&rows);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("iri,label,type,definition,alternative label,rdfs:subClassOf,rdfs:subPropertyOf,definition source,is curated in")
    );
    let data = lines.next().unwrap_or_default();
    assert!(data.starts_with("\"https://example.org/animals/felix\",\"Felix \"\"the\"\" Cat\","));
    assert_eq!(lines.next(), None);
}

#[test]
fn named_graph_statements_are_visible() {
    let doc = OntologyDocument::open(&fixture("animals.nq"), None).expect("fixture parses");
    assert_eq!(doc.format(), RdfFormat::NQuads);
    assert_eq!(doc.metadata().display_name(), Some("Animals (quads)"));
    let model = doc.model();
    assert_eq!(model.rows.len(), 2);
    assert_eq!(model.rows[0].value("label"), "Cat");
    assert_eq!(model.rows[1].value("label"), "");
}

#[test]
fn trig_document() {
    let trig = r#"
        @prefix owl:  <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        <https://example.org/g> {
            <https://example.org/p> a owl:DatatypeProperty ; rdfs:label "weight" .
        }
    "#;
    let doc = OntologyDocument::load(trig, RdfFormat::TriG).expect("valid TriG");
    assert_eq!(doc.model().rows.len(), 1);
    assert!(doc.metadata().is_empty());
    assert_eq!(doc.export_filename(chrono_now()).split('-').next(), Some("Ontology"));
}

#[test]
fn export_name_uses_ontology_name() {
    let doc = animals();
    assert!(doc.export_filename(chrono_now()).starts_with("AnimalOntology-"));
    assert!(doc.export_filename(chrono_now()).ends_with(".csv"));
}

#[test]
fn fallback_detection() {
    assert_eq!(detect_rdf_format_from_filename("weird.ext").media_type(), "text/turtle");
}

#[test]
fn parse_failure_propagates() {
    assert!(OntologyDocument::load("@prefix broken", RdfFormat::Turtle).is_err());
}

fn chrono_now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
