//! RDF syntaxes and filename-based format detection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OntologyError;

/// The RDF syntaxes the viewer can load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RdfFormat {
    /// Turtle 1.1 (also used for `.n3` files).
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
    /// N-Quads.
    NQuads,
    /// TriG.
    TriG,
}

impl RdfFormat {
    /// All supported formats.
    pub const ALL: [RdfFormat; 4] = [
        RdfFormat::Turtle,
        RdfFormat::NTriples,
        RdfFormat::NQuads,
        RdfFormat::TriG,
    ];

    /// The IANA media type.
    #[must_use]
    pub fn media_type(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "text/turtle",
            RdfFormat::NTriples => "application/n-triples",
            RdfFormat::NQuads => "application/n-quads",
            RdfFormat::TriG => "application/trig",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "Turtle",
            RdfFormat::NTriples => "N-Triples",
            RdfFormat::NQuads => "N-Quads",
            RdfFormat::TriG => "TriG",
        }
    }

    /// Returns true for syntaxes that carry named graphs.
    #[must_use]
    pub fn is_dataset(self) -> bool {
        matches!(self, RdfFormat::NQuads | RdfFormat::TriG)
    }

    /// Resolves a media type, ignoring parameters such as `; charset=utf-8`.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::UnknownMediaType`] for anything other than the four supported types.
    pub fn from_media_type(media_type: &str) -> Result<Self, OntologyError> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        RdfFormat::ALL
            .into_iter()
            .find(|f| f.media_type() == essence)
            .ok_or_else(|| OntologyError::UnknownMediaType(media_type.to_string()))
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RdfFormat {
    type Err = OntologyError;

    /// Accepts a media type or a short name (`turtle`, `ttl`, `nt`, `nq`, `trig`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "turtle" | "ttl" | "n3" => Ok(RdfFormat::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(RdfFormat::NTriples),
            "nquads" | "n-quads" | "nq" => Ok(RdfFormat::NQuads),
            "trig" => Ok(RdfFormat::TriG),
            _ => RdfFormat::from_media_type(s),
        }
    }
}

/// Infers the RDF syntax from a file name's extension.
///
/// `.ttl` and `.n3` map to Turtle, `.nt` to N-Triples, `.nq` to N-Quads and
/// `.trig` to TriG. Matching is case-insensitive; any other extension (or
/// none) falls back to Turtle.
#[must_use]
pub fn detect_rdf_format_from_filename(filename: &str) -> RdfFormat {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("ttl") | Some("n3") => RdfFormat::Turtle,
        Some("nt") => RdfFormat::NTriples,
        Some("nq") => RdfFormat::NQuads,
        Some("trig") => RdfFormat::TriG,
        other => {
            tracing::warn!(
                filename,
                extension = other.unwrap_or(""),
                "unrecognised RDF file extension, assuming Turtle"
            );
            RdfFormat::Turtle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(detect_rdf_format_from_filename("a.ttl"), RdfFormat::Turtle);
        assert_eq!(detect_rdf_format_from_filename("a.n3"), RdfFormat::Turtle);
        assert_eq!(detect_rdf_format_from_filename("a.nt"), RdfFormat::NTriples);
        assert_eq!(detect_rdf_format_from_filename("a.nq"), RdfFormat::NQuads);
        assert_eq!(detect_rdf_format_from_filename("dir/a.trig"), RdfFormat::TriG);
    }

    #[test]
    fn extension_case_is_ignored() {
        assert_eq!(detect_rdf_format_from_filename("DATA.NT"), RdfFormat::NTriples);
    }

    #[test]
    fn unknown_extension_falls_back_to_turtle() {
        let format = detect_rdf_format_from_filename("weird.ext");
        assert_eq!(format, RdfFormat::Turtle);
        assert_eq!(format.media_type(), "text/turtle");
        assert_eq!(detect_rdf_format_from_filename("no_extension"), RdfFormat::Turtle);
    }

    #[test]
    fn media_type_parameters_ignored() {
        assert_eq!(
            RdfFormat::from_media_type("application/n-quads; charset=utf-8").ok(),
            Some(RdfFormat::NQuads)
        );
        assert!(RdfFormat::from_media_type("application/rdf+xml").is_err());
    }

    #[test]
    fn short_names_parse() {
        assert_eq!("trig".parse::<RdfFormat>().ok(), Some(RdfFormat::TriG));
        assert_eq!("text/turtle".parse::<RdfFormat>().ok(), Some(RdfFormat::Turtle));
    }
}
