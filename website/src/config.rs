//! Viewer site configuration, read from an optional TOML file.
//!
//! ```toml
//! title = "CCO Viewer"
//! base_path = "/viewer"
//! default_sort_column = 1
//! default_sort_direction = "asc"
//!
//! [[nav]]
//! label = "Viewer"
//! url = "/"
//! ```

use std::path::{Path, PathBuf};

use ontoview_table::SortDirection;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable that overrides [`SiteConfig::base_path`].
pub const BASE_PATH_ENV: &str = "ONTOVIEW_BASE_PATH";

/// Errors reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        /// Config path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`SiteConfig`].
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config path.
        path: PathBuf,
        /// TOML diagnostic.
        #[source]
        source: toml::de::Error,
    },
}

/// A header navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Target URL.
    pub url: String,
    /// Nested links.
    #[serde(default)]
    pub children: Vec<NavLink>,
}

/// Settings for the generated viewer page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SiteConfig {
    /// Site name shown in the header and `<title>`.
    pub title: String,
    /// URL prefix the site is served under (no trailing slash).
    pub base_path: String,
    /// Header navigation links.
    pub nav: Vec<NavLink>,
    /// Column the table is initially sorted by.
    pub default_sort_column: Option<usize>,
    /// Initial sort direction.
    pub default_sort_direction: SortDirection,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Ontology Viewer".to_string(),
            base_path: String::new(),
            nav: vec![
                NavLink {
                    label: "Viewer".to_string(),
                    url: "/".to_string(),
                    children: Vec::new(),
                },
                NavLink {
                    label: "Data".to_string(),
                    url: "/data/table.json".to_string(),
                    children: Vec::new(),
                },
            ],
            default_sort_column: None,
            default_sort_direction: SortDirection::Ascending,
        }
    }
}

impl SiteConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text does not describe a `SiteConfig`.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads `path` if given, otherwise the defaults, then applies the
    /// `ONTOVIEW_BASE_PATH` override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&text).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => Self::default(),
        };
        let config = config.with_base_path_override(std::env::var(BASE_PATH_ENV).ok());
        debug!(title = %config.title, base_path = %config.base_path, "loaded site config");
        Ok(config)
    }

    /// Replaces `base_path` when `value` is set, trimming any trailing `/`.
    #[must_use]
    pub fn with_base_path_override(mut self, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.base_path = value;
        }
        self.base_path = self.base_path.trim_end_matches('/').to_string();
        self
    }

    /// Prefixes a site-absolute URL with the base path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_path, path)
        } else {
            path.to_string()
        }
    }
}
