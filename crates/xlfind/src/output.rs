use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `content` to `path` through a temporary file in the same directory,
/// so readers never observe a half-written bundle.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create '{}'", parent.display()))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".xlfind-")
        .suffix(".tmp")
        .tempfile_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote bundle");
    Ok(())
}
