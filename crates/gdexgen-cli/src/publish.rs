//! Atomic publication of the generated header.
//!
//! The header is written to a temporary file in the destination
//! directory and renamed into place only once the write completed, so a
//! failed run never leaves a half-written header behind.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use gdexgen_core::GeneratorError;
use tempfile::NamedTempFile;

/// Write `contents` to `path`, replacing any existing file atomically.
pub fn publish(path: &Path, contents: &str) -> Result<()> {
    let mut temp = NamedTempFile::new_in(staging_dir(path)).map_err(|err| {
        GeneratorError::SinkUnavailable {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    })?;

    temp.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write header to {}", path.display()))?;

    temp.persist(path)
        .with_context(|| format!("Failed to publish header to {}", path.display()))?;

    Ok(())
}

/// Directory the temporary file is created in.
///
/// Must be the destination's own directory: `persist` renames the temp
/// file into place, and a rename only stays atomic (and possible at
/// all) within one filesystem. A bare file name stages in `.`, never in
/// the system temp dir, which is frequently a separate mount.
fn staging_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
