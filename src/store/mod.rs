//! JSON persistence for scan artifacts.
//!
//! All three artifacts (catalog, registry, graph) are plain UTF-8 JSON files
//! with no schema version, overwritten wholesale on save through atomic
//! temp-and-rename writes.
//!
//! Loading is deliberately forgiving: a missing or malformed file degrades to
//! "no prior data" with a warning rather than failing the run. This silently
//! discards valid-but-corrupted state, which is an accepted trade-off - the
//! next full run rebuilds it.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::utils::fs::safe_write;

/// Load a JSON artifact, degrading to the default value when the file is
/// missing or unparseable.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return T::default(),
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                "discarding malformed artifact {}: {}",
                path.display(),
                e
            );
            T::default()
        }
    }
}

/// Serialize an artifact to JSON and write it atomically.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize artifact for {}", path.display()))?;

    safe_write(path, &content)
        .with_context(|| format!("Failed to save artifact: {}", path.display()))
}
