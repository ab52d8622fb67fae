//! HTML rendering for the viewer page.

use ontoview_table::model::VALUE_SEPARATOR;
use ontoview_table::{Row, SortDirection, TableModel};
use ontoview_vocab::shorten;

use crate::extractor::{looks_like_iri, MetadataEntry};
use crate::model::SortState;

/// Escapes HTML special characters in a string.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders one IRI as a link whose text is the CURIE form.
fn render_iri(iri: &str) -> String {
    format!(
        "<a href=\"{href}\" title=\"{href}\">{text}</a>",
        href = escape_html(iri),
        text = escape_html(&shorten(iri))
    )
}

/// Renders a table cell's contents. Multi-valued cells are split on the
/// value separator so each IRI gets its own link.
pub fn render_cell(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    value
        .split(VALUE_SEPARATOR)
        .map(|part| {
            if looks_like_iri(part) {
                render_iri(part)
            } else {
                escape_html(part)
            }
        })
        .collect::<Vec<_>>()
        .join(VALUE_SEPARATOR)
}

/// Renders the ontology metadata as a definition list.
pub fn render_metadata_panel(heading: &str, entries: &[MetadataEntry]) -> String {
    let mut html = format!(
        "<section class=\"ontology-metadata\" aria-labelledby=\"ontology-title\">\n<h1 id=\"ontology-title\">{}</h1>\n",
        escape_html(heading)
    );
    if entries.is_empty() {
        html.push_str("<p class=\"muted\">No owl:Ontology declaration found.</p>\n");
    } else {
        html.push_str("<dl>\n");
        for entry in entries {
            let value = if entry.is_iri {
                format!("<a href=\"{v}\">{v}</a>", v = escape_html(&entry.value))
            } else {
                escape_html(&entry.value)
            };
            html.push_str(&format!(
                "<dt>{}</dt><dd>{}</dd>\n",
                escape_html(entry.label),
                value
            ));
        }
        html.push_str("</dl>\n");
    }
    html.push_str("</section>\n");
    html
}

/// Renders the filter box and export/print buttons.
pub fn render_toolbar(row_count: usize) -> String {
    format!(
        r#"<div class="toolbar" role="search">
<label for="table-filter">Filter</label>
<input type="search" id="table-filter" placeholder="Filter elements…" autocomplete="off">
<span id="row-count" aria-live="polite">{row_count} elements</span>
<button type="button" id="export-csv">Export CSV</button>
<button type="button" id="print-table">Print</button>
</div>
"#
    )
}

/// Renders the element table with `rows` in the given order.
pub fn render_table(model: &TableModel, rows: &[Row], sort: SortState) -> String {
    let mut html = String::from(
        "<div class=\"table-wrap\">\n<table id=\"element-table\">\n<thead>\n<tr>\n",
    );
    for (index, header) in model.headers.iter().enumerate() {
        let aria_sort = match sort.column {
            Some(c) if c == index => match sort.direction {
                SortDirection::Ascending => "ascending",
                SortDirection::Descending => "descending",
            },
            _ => "none",
        };
        html.push_str(&format!(
            "<th scope=\"col\" data-column=\"{index}\" aria-sort=\"{aria_sort}\"><button type=\"button\">{}</button></th>\n",
            escape_html(header)
        ));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for key in &model.keys {
            html.push_str(&format!(
                "<td data-key=\"{}\">{}</td>",
                escape_html(key),
                render_cell(row.value(key))
            ));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
    html
}

/// The pieces of a page placed inside the shared site shell.
pub struct PageShell<'a> {
    /// Page title (without the site suffix).
    pub title: &'a str,
    /// Site name.
    pub site_title: &'a str,
    /// Home URL.
    pub home_url: &'a str,
    /// Rendered header navigation.
    pub nav_html: &'a str,
    /// Rendered breadcrumbs.
    pub breadcrumb_html: &'a str,
    /// Main content.
    pub content_html: &'a str,
    /// Stylesheet URL.
    pub css_url: &'a str,
    /// Client script URL.
    pub js_url: &'a str,
    /// JSON embedded for the client script (already script-safe).
    pub data_json: &'a str,
}

impl PageShell<'_> {
    /// Renders the page.
    pub fn render(&self) -> String {
        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} — {site_title}</title>
<link rel="stylesheet" href="{css_url}">
</head>
<body>
<a href="#main-content" class="skip-link">Skip to main content</a>
<header class="site-header">
<a href="{home_url}" class="site-logo">{site_title}</a>
<nav aria-label="Site navigation" class="site-nav">
{nav_html}</nav>
</header>
<main id="main-content">
<nav aria-label="Breadcrumb" class="breadcrumb">{breadcrumb_html}</nav>
{content_html}</main>
<footer class="site-footer">
<p>Generated by ontoview</p>
</footer>
<script type="application/json" id="table-data">{data_json}</script>
<script src="{js_url}" defer></script>
</body>
</html>
"##,
            title = escape_html(self.title),
            site_title = escape_html(self.site_title),
            css_url = escape_html(self.css_url),
            home_url = escape_html(self.home_url),
            nav_html = self.nav_html,
            breadcrumb_html = self.breadcrumb_html,
            content_html = self.content_html,
            data_json = self.data_json,
            js_url = escape_html(self.js_url),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_link_iris_with_curies() {
        let html = render_cell("http://www.w3.org/2002/07/owl#Class; https://example.org/X");
        assert_eq!(
            html,
            "<a href=\"http://www.w3.org/2002/07/owl#Class\" title=\"http://www.w3.org/2002/07/owl#Class\">owl:Class</a>; \
             <a href=\"https://example.org/X\" title=\"https://example.org/X\">https://example.org/X</a>"
        );
    }

    #[test]
    fn cells_escape_text() {
        assert_eq!(render_cell("a <b> & \"c\""), "a &lt;b&gt; &amp; &quot;c&quot;");
        assert_eq!(render_cell(""), "");
    }

    #[test]
    fn table_marks_sorted_column() {
        let model = TableModel {
            headers: vec!["iri".into(), "label".into()],
            keys: vec!["iri".into(), "label".into()],
            rows: vec![[("iri", "https://e.org/a"), ("label", "A")].into_iter().collect()],
        };
        let sort = SortState {
            column: Some(1),
            direction: SortDirection::Descending,
        };
        let html = render_table(&model, &model.rows, sort);
        assert!(html.contains("data-column=\"1\" aria-sort=\"descending\""));
        assert!(html.contains("data-column=\"0\" aria-sort=\"none\""));
        assert!(html.contains("<td data-key=\"label\">A</td>"));
    }

    #[test]
    fn empty_metadata_panel() {
        let html = render_metadata_panel("Untitled ontology", &[]);
        assert!(html.contains("No owl:Ontology declaration found."));
    }
}
