//! CSV serialization and export file naming.

use chrono::{DateTime, Utc};

use crate::model::{Row, TableModel};

/// Fallback file stem when the ontology has no usable name.
pub const DEFAULT_EXPORT_STEM: &str = "Ontology";

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serializes rows as CSV.
///
/// The first line is `headers` joined by commas, unquoted. Each following
/// line holds the cell for every key in `keys` (empty when missing), always
/// double-quoted with inner quotes doubled. Lines are separated by `\n`.
#[must_use]
pub fn to_csv(headers: &[String], keys: &[String], rows: &[Row]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let cells: Vec<String> = keys.iter().map(|k| quote(row.value(k))).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Serializes all of `model`'s rows as CSV.
#[must_use]
pub fn model_to_csv(model: &TableModel) -> String {
    to_csv(&model.headers, &model.keys, &model.rows)
}

/// Converts a display name to a PascalCase file stem.
///
/// Runs of non-alphanumeric characters separate words; each word's first
/// character is upper-cased and the words are concatenated. Returns
/// `"Ontology"` when there is no name or it has no alphanumeric content.
#[must_use]
pub fn to_pascal_case(name: Option<&str>) -> String {
    let pascal: String = name
        .unwrap_or_default()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect();
    if pascal.is_empty() {
        DEFAULT_EXPORT_STEM.to_string()
    } else {
        pascal
    }
}

/// ISO-8601 UTC timestamp with `:` replaced by `-`, safe in file names.
#[must_use]
pub fn export_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace(':', "-")
}

/// File name for a CSV export: `{PascalName}-{timestamp}.csv`.
#[must_use]
pub fn export_filename(name: Option<&str>, now: DateTime<Utc>) -> String {
    format!("{}-{}.csv", to_pascal_case(name), export_timestamp(now))
}
