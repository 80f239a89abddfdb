//! Atomic file write operations using temp-and-rename strategy.
//!
//! Persisted artifacts are overwritten wholesale on every save; writing
//! through a temporary file keeps a crashed save from leaving a reader with a
//! half-written JSON document.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`] for text content. The file
/// either contains the new content or the old content, never a partial write.
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Writes content to a temporary file (`.tmp` extension)
/// 2. Syncs the temporary file to disk
/// 3. Atomically renames the temporary file to the target path
///
/// Parent directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
