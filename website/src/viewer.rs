//! Generates the table JSON payload and the viewer.js client.

use anyhow::Result;

use crate::model::ViewerPayload;

/// Serializes the payload for `data/table.json`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn payload_json(payload: &ViewerPayload<'_>) -> Result<String> {
    serde_json::to_string_pretty(payload)
        .map_err(|e| anyhow::anyhow!("Failed to serialize table payload: {}", e))
}

/// Serializes the payload for embedding in a `<script type="application/json">`
/// element. `<` is escaped so no value can close the element early.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn embedded_json(payload: &ViewerPayload<'_>) -> Result<String> {
    let json = serde_json::to_string(payload)
        .map_err(|e| anyhow::anyhow!("Failed to serialize table payload: {}", e))?;
    Ok(json.replace('<', "\\u003c"))
}

/// Returns the client-side viewer JavaScript.
///
/// Filtering, sorting, CSV export and the export file name follow the same
/// rules as `ontoview_table::view` and `ontoview_table::export`.
pub fn viewer_js() -> &'static str {
    r#"// ontoview — client-side table filtering, sorting, and CSV export
// Reads the JSON payload embedded in #table-data

(function () {
  'use strict';

  var dataEl = document.getElementById('table-data');
  var table = document.getElementById('element-table');
  if (!dataEl || !table) return;

  var payload = JSON.parse(dataEl.textContent);
  var model = payload.model;
  var metadata = payload.metadata || {};
  var state = {
    query: '',
    column: payload.sort.column,
    direction: payload.sort.direction || 'asc'
  };

  var tbody = table.querySelector('tbody');
  var filterInput = document.getElementById('table-filter');
  var rowCount = document.getElementById('row-count');
  var exportButton = document.getElementById('export-csv');
  var printButton = document.getElementById('print-table');

  var PREFIXES = [
    ['rdf', 'http://www.w3.org/1999/02/22-rdf-syntax-ns#'],
    ['rdfs', 'http://www.w3.org/2000/01/rdf-schema#'],
    ['owl', 'http://www.w3.org/2002/07/owl#'],
    ['xsd', 'http://www.w3.org/2001/XMLSchema#'],
    ['skos', 'http://www.w3.org/2004/02/skos/core#'],
    ['dcterms', 'http://purl.org/dc/terms/'],
    ['dc', 'http://purl.org/dc/elements/1.1/'],
    ['obo', 'http://purl.obolibrary.org/obo/'],
    ['cco', 'http://www.ontologyrepository.com/CommonCoreOntologies/'],
    ['cco2', 'https://www.commoncoreontologies.org/']
  ];

  function shorten(iri) {
    var best = null;
    PREFIXES.forEach(function (p) {
      if (iri.indexOf(p[1]) === 0 && (!best || p[1].length > best[1].length)) best = p;
    });
    return best ? best[0] + ':' + iri.slice(best[1].length) : iri;
  }

  function looksLikeIri(value) {
    return /^(https?:\/\/|urn:)\S*$/.test(value);
  }

  function filterAndSortRows(rows, query, column, direction) {
    var needle = (query || '').toLowerCase();
    var result = rows.filter(function (row) {
      if (!needle) return true;
      return Object.keys(row).some(function (k) {
        return String(row[k] == null ? '' : row[k]).toLowerCase().indexOf(needle) !== -1;
      });
    });
    if (column == null || column < 0 || column >= model.keys.length) return result;
    var key = model.keys[column];
    var sign = direction === 'desc' ? -1 : 1;
    return result
      .map(function (row, i) { return [row, i]; })
      .sort(function (a, b) {
        var c = String(a[0][key] || '').localeCompare(String(b[0][key] || ''));
        return c !== 0 ? sign * c : a[1] - b[1];
      })
      .map(function (pair) { return pair[0]; });
  }

  function renderCell(td, value) {
    if (!value) return;
    value.split('; ').forEach(function (part, i) {
      if (i > 0) td.appendChild(document.createTextNode('; '));
      if (looksLikeIri(part)) {
        var a = document.createElement('a');
        a.href = part;
        a.title = part;
        a.textContent = shorten(part);
        td.appendChild(a);
      } else {
        td.appendChild(document.createTextNode(part));
      }
    });
  }

  function render() {
    var rows = filterAndSortRows(model.rows, state.query, state.column, state.direction);
    tbody.innerHTML = '';
    rows.forEach(function (row) {
      var tr = document.createElement('tr');
      model.keys.forEach(function (key) {
        var td = document.createElement('td');
        td.setAttribute('data-key', key);
        renderCell(td, row[key]);
        tr.appendChild(td);
      });
      tbody.appendChild(tr);
    });
    table.querySelectorAll('th').forEach(function (th) {
      var index = Number(th.getAttribute('data-column'));
      var sort = 'none';
      if (index === state.column) sort = state.direction === 'desc' ? 'descending' : 'ascending';
      th.setAttribute('aria-sort', sort);
    });
    if (rowCount) rowCount.textContent = rows.length + ' elements';
    return rows;
  }

  function toPascalCase(name) {
    if (!name) return 'Ontology';
    var pascal = name
      .split(/[^\p{L}\p{N}]+/u)
      .filter(function (w) { return w.length > 0; })
      .map(function (w) { return w.charAt(0).toUpperCase() + w.slice(1); })
      .join('');
    return pascal || 'Ontology';
  }

  function toCsv(rows) {
    var lines = [model.headers.join(',')];
    rows.forEach(function (row) {
      lines.push(model.keys.map(function (k) {
        var v = row[k] == null ? '' : String(row[k]);
        return '"' + v.replace(/"/g, '""') + '"';
      }).join(','));
    });
    return lines.join('\n');
  }

  function exportCsv() {
    var rows = filterAndSortRows(model.rows, state.query, state.column, state.direction);
    var blob = new Blob([toCsv(rows)], { type: 'text/csv;charset=utf-8' });
    var stamp = new Date().toISOString().replace(/:/g, '-');
    var a = document.createElement('a');
    a.href = URL.createObjectURL(blob);
    a.download = toPascalCase(metadata.ontologyName) + '-' + stamp + '.csv';
    document.body.appendChild(a);
    a.click();
    document.body.removeChild(a);
    URL.revokeObjectURL(a.href);
  }

  table.querySelectorAll('th').forEach(function (th) {
    var button = th.querySelector('button') || th;
    button.addEventListener('click', function () {
      var index = Number(th.getAttribute('data-column'));
      if (state.column === index) {
        state.direction = state.direction === 'asc' ? 'desc' : 'asc';
      } else {
        state.column = index;
        state.direction = 'asc';
      }
      render();
    });
  });

  if (filterInput) {
    filterInput.addEventListener('input', function () {
      state.query = filterInput.value;
      render();
    });
  }
  if (exportButton) exportButton.addEventListener('click', exportCsv);
  if (printButton) printButton.addEventListener('click', function () { window.print(); });
}());
"#
}

/// Returns the viewer stylesheet.
pub fn style_css() -> &'static str {
    r#"/* ontoview — viewer stylesheet (no external dependencies) */
:root {
  --fg: #1d232a;
  --muted: #5b6672;
  --accent: #1f5fae;
  --border: #d5dbe1;
  --stripe: #f5f7f9;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: var(--fg); line-height: 1.45; }
a { color: var(--accent); }
.skip-link { position: absolute; left: -999px; }
.skip-link:focus { left: 1rem; top: 1rem; background: #fff; padding: .5rem; z-index: 10; }
.site-header { display: flex; align-items: center; gap: 2rem; padding: .75rem 1.5rem; border-bottom: 1px solid var(--border); }
.site-logo { font-weight: 700; text-decoration: none; }
.site-nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
.site-nav li.current > a { font-weight: 700; text-decoration: underline; }
main { padding: 1rem 1.5rem; }
.breadcrumb { font-size: .9rem; color: var(--muted); margin-bottom: 1rem; }
.ontology-metadata dl { display: grid; grid-template-columns: max-content 1fr; gap: .25rem 1rem; }
.ontology-metadata dt { font-weight: 600; }
.ontology-metadata dd { margin: 0; }
.muted { color: var(--muted); }
.toolbar { display: flex; flex-wrap: wrap; align-items: center; gap: .75rem; margin: 1rem 0; }
.toolbar input { padding: .35rem .5rem; min-width: 18rem; }
.table-wrap { overflow-x: auto; }
table { border-collapse: collapse; width: 100%; font-size: .9rem; }
th, td { border: 1px solid var(--border); padding: .4rem .6rem; text-align: left; vertical-align: top; }
th button { all: unset; cursor: pointer; font-weight: 600; }
th[aria-sort="ascending"] button::after { content: " \25B2"; }
th[aria-sort="descending"] button::after { content: " \25BC"; }
tbody tr:nth-child(even) { background: var(--stripe); }
.site-footer { padding: 1rem 1.5rem; color: var(--muted); border-top: 1px solid var(--border); }
@media print {
  .site-header, .toolbar, .site-footer, .breadcrumb, .skip-link { display: none; }
  a { color: inherit; text-decoration: none; }
}
"#
}
