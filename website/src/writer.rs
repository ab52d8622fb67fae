//! Writes the viewer's artifacts under the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Files produced for every viewer, relative to the output directory.
pub const ARTIFACTS: [&str; 4] = [
    "index.html",
    "data/table.json",
    "css/style.css",
    "js/viewer.js",
];

/// Writes `content` to `relative` (a `/`-separated path) inside `out_dir`,
/// creating intermediate directories. Returns the full path written.
///
/// # Errors
///
/// Returns an error naming the artifact if a directory cannot be created or
/// the file cannot be written.
pub fn write_artifact(out_dir: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let path = relative
        .split('/')
        .fold(out_dir.to_path_buf(), |path, part| path.join(part));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!(
                "Cannot create directory for viewer artifact {relative}: {}",
                parent.display()
            )
        })?;
    }
    fs::write(&path, content)
        .with_context(|| format!("Cannot write viewer artifact {relative}: {}", path.display()))?;
    debug!(
        artifact = relative,
        path = %path.display(),
        bytes = content.len(),
        "wrote viewer artifact"
    );
    Ok(path)
}
