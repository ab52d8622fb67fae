//! ontoview static viewer generator.
//!
//! Renders a loaded ontology as a self-contained directory of static HTML,
//! CSS, JavaScript, and JSON. The page works without a server: the element
//! table is rendered up front, and `viewer.js` adds filtering, sorting, CSV
//! export, and printing on top of the embedded JSON model.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use ontoview_table::OntologyDocument;
//! use ontoview_website::{config::SiteConfig, generate};
//!
//! let doc = OntologyDocument::open(Path::new("ontology.ttl"), None).expect("load");
//! let out = PathBuf::from("public");
//! generate(&doc, &SiteConfig::default(), &out).expect("Viewer generation failed");
//! ```
//!
//! # Output Structure
//!
//! ```text
//! public/
//!   index.html
//!   data/table.json
//!   css/style.css
//!   js/viewer.js
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod extractor;
pub mod model;
pub mod nav;
pub mod renderer;
pub mod viewer;
pub mod writer;

use std::path::Path;

use anyhow::Result;
use ontoview_table::OntologyDocument;
use tracing::info;

use config::SiteConfig;
use extractor::{initial_rows, initial_sort, metadata_entries, ontology_heading, viewer_payload};
use nav::{build_nav, render_breadcrumbs, render_nav, viewer_breadcrumbs};
use renderer::{render_metadata_panel, render_table, render_toolbar, PageShell};

/// Renders the viewer page for `doc` as a complete HTML document.
///
/// # Errors
///
/// Returns an error if the embedded JSON payload cannot be serialized.
pub fn render_viewer_page(doc: &OntologyDocument, config: &SiteConfig) -> Result<String> {
    let heading = ontology_heading(doc.metadata());
    let sort = initial_sort(doc, config);
    let rows = initial_rows(doc, sort);

    let mut content = render_metadata_panel(&heading, &metadata_entries(doc.metadata()));
    content.push_str(&render_toolbar(rows.len()));
    content.push_str(&render_table(doc.model(), &rows, sort));

    let nav_html = render_nav(&build_nav(config), &config.url("/"));
    let breadcrumb_html = render_breadcrumbs(&viewer_breadcrumbs(config, &heading));
    let data_json = viewer::embedded_json(&viewer_payload(doc, sort))?;
    let home_url = config.url("/");
    let css_url = config.url("/css/style.css");
    let js_url = config.url("/js/viewer.js");

    Ok(PageShell {
        title: &heading,
        site_title: &config.title,
        home_url: &home_url,
        nav_html: &nav_html,
        breadcrumb_html: &breadcrumb_html,
        content_html: &content,
        css_url: &css_url,
        js_url: &js_url,
        data_json: &data_json,
    }
    .render())
}

/// Generates the complete viewer into `out_dir`.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn generate(doc: &OntologyDocument, config: &SiteConfig, out_dir: &Path) -> Result<()> {
    let page = render_viewer_page(doc, config)?;
    let payload = viewer::payload_json(&viewer_payload(doc, initial_sort(doc, config)))?;
    let [index, data, css, js] = writer::ARTIFACTS;

    writer::write_artifact(out_dir, index, &page)?;
    writer::write_artifact(out_dir, data, &payload)?;
    writer::write_artifact(out_dir, css, viewer::style_css())?;
    writer::write_artifact(out_dir, js, viewer::viewer_js())?;

    info!(
        out = %out_dir.display(),
        elements = doc.model().rows.len(),
        "viewer generated"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontoview_table::RdfFormat;

    const TTL: &str = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex:   <https://example.org/> .

ex:onto a owl:Ontology ; rdfs:label "Tiny <Test> Ontology" .
ex:Zebra a owl:Class ; rdfs:label "Zebra" .
ex:Apple a owl:Class ; rdfs:label "Apple" .
"#;

    fn doc() -> OntologyDocument {
        OntologyDocument::load(TTL, RdfFormat::Turtle).unwrap()
    }

    #[test]
    fn page_contains_shell_and_table() {
        let html = render_viewer_page(&doc(), &SiteConfig::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Tiny &lt;Test&gt; Ontology — Ontology Viewer</title>"));
        assert!(html.contains("<header class=\"site-header\">"));
        assert!(html.contains("id=\"element-table\""));
        assert!(html.contains("<td data-key=\"label\">Zebra</td>"));
        assert!(html.contains("<script type=\"application/json\" id=\"table-data\">"));
        assert!(html.contains("src=\"/js/viewer.js\""));
    }

    #[test]
    fn default_sort_orders_rendered_rows() {
        let mut config = SiteConfig::default();
        config.default_sort_column = Some(1);
        let html = render_viewer_page(&doc(), &config).unwrap();
        let apple = html.find(">Apple</td>").unwrap();
        let zebra = html.find(">Zebra</td>").unwrap();
        assert!(apple < zebra);
    }

    #[test]
    fn out_of_range_default_sort_is_ignored() {
        let mut config = SiteConfig::default();
        config.default_sort_column = Some(42);
        let sort = initial_sort(&doc(), &config);
        assert_eq!(sort.column, None);
    }

    #[test]
    fn generate_writes_all_artifacts() {
        let out = std::env::temp_dir().join(format!("ontoview-site-{}", std::process::id()));
        generate(&doc(), &SiteConfig::default(), &out).unwrap();
        for path in writer::ARTIFACTS {
            assert!(out.join(path).is_file(), "missing {path}");
        }
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join("data/table.json")).unwrap())
                .unwrap();
        assert_eq!(json["model"]["rows"].as_array().map(Vec::len), Some(2));
        std::fs::remove_dir_all(&out).unwrap();
    }
}
