//! Picks one representative literal out of several candidates.

use crate::term::Literal;

/// The language tag preferred when several literals are available.
pub const PREFERRED_LANGUAGE: &str = "en";

/// Selects the best literal by language preference.
///
/// In order: the first literal tagged `en` (any case), else the first
/// untagged literal, else the first literal. Returns `None` only for empty
/// input.
pub fn select_literal<'a, I>(literals: I) -> Option<&'a Literal>
where
    I: IntoIterator<Item = &'a Literal>,
{
    let mut first = None;
    let mut first_untagged = None;
    for literal in literals {
        if literal.has_language(PREFERRED_LANGUAGE) {
            return Some(literal);
        }
        if first_untagged.is_none() && literal.language.is_none() {
            first_untagged = Some(literal);
        }
        first.get_or_insert(literal);
    }
    first_untagged.or(first)
}
