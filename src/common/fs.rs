use std::{fs, io::ErrorKind, path::Path};

use anyhow::{Context, Result, bail};

/// Create `path` (and parents) unless a directory is already there.
/// An empty path names the working directory and is accepted as is.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() { return Ok(()) }
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => bail!("[common::fs] Output path is not a directory: {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => fs::create_dir_all(path)
            .with_context(|| format!("[common::fs] Failed to create output directory {}", path.display())),
        Err(e) => Err(e).with_context(|| format!("[common::fs] Cannot inspect {}", path.display())),
    }
}

/// Error unless `path` is an existing table directory.
pub(crate) fn require_dir_exists(path: &Path) -> Result<()> {
    let meta = fs::metadata(path)
        .with_context(|| format!("[common::fs] Table directory is not accessible: {}", path.display()))?;
    if !meta.is_dir() {
        bail!("[common::fs] Table path is not a directory: {}", path.display());
    }
    Ok(())
}
