//! Filtering and sorting of table rows for display and export.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};

use crate::model::{Row, TableModel};

/// Sort order for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    /// Largest first.
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// The short form, `asc` or `desc`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a sort direction other than `asc`/`desc`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort direction {0:?} (expected \"asc\" or \"desc\")")]
pub struct ParseSortDirectionError(String);

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseSortDirectionError(s.to_string())),
        }
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(error) => {
                tracing::warn!(
                    %error,
                    "root collator unavailable, sorting by case-folded code point"
                );
                None
            }
        }
    };
}

/// Compares two strings with the Unicode root collation (UCA, tertiary
/// strength), as `String.prototype.localeCompare` does in the viewer.
///
/// Accents and case are secondary and tertiary differences, so `"Éclair"`
/// sorts between `"eagle"` and `"fig"`, and `"a"` before `"A"`. Strings the
/// collator considers equal are ordered by code point.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let collated = ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => case_folded_compare(a, b),
    });
    collated.then_with(|| a.cmp(b))
}

/// Case-insensitive ordering with lowercase first on case-only differences.
fn case_folded_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    match (x.is_lowercase(), y.is_lowercase()) {
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        _ => x.cmp(&y),
                    }
                })
        })
}

/// Returns true if any cell of `row` contains `needle` (already lowercased).
fn row_matches(row: &Row, needle: &str) -> bool {
    needle.is_empty() || row.values().any(|v| v.to_lowercase().contains(needle))
}

/// Rows whose cells contain `query`, case-insensitively. An empty query
/// keeps every row.
#[must_use]
pub fn filter_rows(rows: &[Row], query: &str) -> Vec<Row> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, &needle))
        .cloned()
        .collect()
}

/// Sorts `rows` in place by the cell under `key`. The sort is stable, so
/// rows with equal cells keep their relative order.
pub fn sort_rows(rows: &mut [Row], key: &str, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = locale_compare(a.value(key), b.value(key));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Filters the model's rows by `query`, then sorts them by the column at
/// `sort_column`.
///
/// Sorting is skipped when `sort_column` is `None` or past the last column.
/// The model is left untouched; a new vector is returned.
#[must_use]
pub fn filter_and_sort_rows(
    model: &TableModel,
    query: &str,
    sort_column: Option<usize>,
    direction: SortDirection,
) -> Vec<Row> {
    let mut rows = filter_rows(&model.rows, query);
    if let Some(key) = sort_column.and_then(|i| model.key_at(i)) {
        sort_rows(&mut rows, key, direction);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(labels: &[&str]) -> TableModel {
        TableModel {
            headers: vec!["iri".into(), "label".into()],
            keys: vec!["iri".into(), "label".into()],
            rows: labels
                .iter()
                .map(|l| {
                    [("iri", format!("https://example.org/{l}")), ("label", l.to_string())]
                        .into_iter()
                        .collect()
                })
                .collect(),
        }
    }

    fn labels(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.value("label")).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let m = model(&["Zebra", "Apple", "Banana"]);
        let rows = filter_and_sort_rows(&m, "an", Some(1), SortDirection::Ascending);
        assert_eq!(labels(&rows), vec!["Banana"]);
        let rows = filter_and_sort_rows(&m, "ZEB", None, SortDirection::Ascending);
        assert_eq!(labels(&rows), vec!["Zebra"]);
    }

    #[test]
    fn filter_searches_every_column() {
        let m = model(&["Zebra", "Apple"]);
        let rows = filter_and_sort_rows(&m, "example.org/apple", None, SortDirection::Ascending);
        assert_eq!(labels(&rows), vec!["Apple"]);
    }

    #[test]
    fn sort_both_directions() {
        let m = model(&["Zebra", "Apple", "Banana"]);
        let asc = filter_and_sort_rows(&m, "", Some(1), SortDirection::Ascending);
        assert_eq!(labels(&asc), vec!["Apple", "Banana", "Zebra"]);
        let desc = filter_and_sort_rows(&m, "", Some(1), "desc".parse().unwrap());
        assert_eq!(labels(&desc), vec!["Zebra", "Banana", "Apple"]);
    }

    #[test]
    fn out_of_range_column_skips_sort() {
        let m = model(&["Zebra", "Apple"]);
        let rows = filter_and_sort_rows(&m, "", Some(9), SortDirection::Ascending);
        assert_eq!(labels(&rows), vec!["Zebra", "Apple"]);
        let rows = filter_and_sort_rows(&m, "", None, SortDirection::Descending);
        assert_eq!(labels(&rows), vec!["Zebra", "Apple"]);
    }

    #[test]
    fn input_model_is_not_mutated() {
        let m = model(&["Zebra", "Apple"]);
        let before = m.clone();
        let _ = filter_and_sort_rows(&m, "a", Some(1), SortDirection::Ascending);
        assert_eq!(m, before);
    }

    #[test]
    fn collation_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Apple", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn accented_labels_sort_with_their_base_letter() {
        let m = model(&["fig", "Éclair", "eagle", "zebra"]);
        let rows = filter_and_sort_rows(&m, "", Some(1), SortDirection::Ascending);
        assert_eq!(labels(&rows), vec!["eagle", "Éclair", "fig", "zebra"]);
        let rows = filter_and_sort_rows(&m, "", Some(1), SortDirection::Descending);
        assert_eq!(labels(&rows), vec!["zebra", "fig", "Éclair", "eagle"]);
    }

    #[test]
    fn accent_is_weaker_than_base_letter() {
        assert_eq!(locale_compare("résumé", "resume"), Ordering::Greater);
        assert_eq!(locale_compare("résumé", "rezone"), Ordering::Less);
        assert_eq!(locale_compare("Ångström", "Zulu"), Ordering::Less);
    }

    #[test]
    fn fallback_comparison_matches_case_rules() {
        assert_eq!(case_folded_compare("a", "A"), Ordering::Less);
        assert_eq!(case_folded_compare("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn direction_parsing() {
        assert_eq!("ASC".parse::<SortDirection>().ok(), Some(SortDirection::Ascending));
        assert_eq!(
            "descending".parse::<SortDirection>().ok(),
            Some(SortDirection::Descending)
        );
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::default().toggled(), SortDirection::Descending);
    }
}
