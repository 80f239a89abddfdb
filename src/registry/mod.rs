//! Target registry resolution.
//!
//! The [`NameResolver`] scans one fixed configuration repository whose files
//! declare, per target acronym, the known (project name, base URL) pairs.
//! File names carry the acronym: `ord-integration.properties` declares the
//! targets of acronym `ord`.
//!
//! The registry is rebuilt fresh on every run; it is never merged with prior
//! state. When no file in the configuration repository qualifies, the
//! resolver yields no registry at all - a hard stop for graph building, since
//! there is nothing to match callers against.
//!
//! Line parsing here applies the raw `name = http(s)://...` pattern without the
//! comment-marker skip the properties extractor performs; commented lines in
//! integration files become declared entries, matching the scanner's
//! documented behavior exactly.

use anyhow::Result;
use regex::Regex;

use crate::config::RegistrySettings;
use crate::host::{RepositoryHost, is_tree_not_found};
use crate::models::{TargetEntry, TargetRegistry, TreeEntry};

/// Builds the target registry from the configuration repository.
pub struct NameResolver<'a, H> {
    host: &'a H,
    settings: &'a RegistrySettings,
    reference: &'a str,
    pattern: Regex,
}

impl<'a, H: RepositoryHost> NameResolver<'a, H> {
    /// Create a resolver over the configured host and settings.
    ///
    /// `pattern` is the compiled properties-line pattern exposing `name` and
    /// `url_text` capture groups.
    pub fn new(
        host: &'a H,
        settings: &'a RegistrySettings,
        reference: &'a str,
        pattern: Regex,
    ) -> Self {
        Self {
            host,
            settings,
            reference,
            pattern,
        }
    }

    /// Scan the configuration repository into a registry.
    ///
    /// Returns `None` when the repository has no tree or no file passes the
    /// acronym filter.
    pub async fn resolve(&self) -> Result<Option<TargetRegistry>> {
        let project = self.host.get_project(&self.settings.config_project).await?;

        let tree = match self.host.list_tree(&project, self.reference).await {
            Ok(tree) => tree,
            Err(err) if is_tree_not_found(&err) => {
                tracing::warn!(
                    "configuration repository {} has no folder structure",
                    self.settings.config_project
                );
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let mut registry = TargetRegistry::new();
        let mut accepted: Vec<(String, TreeEntry)> = Vec::new();

        for file in tree {
            if file.name.contains(&self.settings.ignored_suffix)
                || file.name.contains(".gitignore")
            {
                continue;
            }

            let acronym = file.name.replace(&self.settings.integration_suffix, "");

            if !self.settings.target_acronyms.contains(&acronym) {
                continue;
            }

            registry.insert(acronym.clone(), Vec::new());
            accepted.push((acronym, file));
        }

        if accepted.is_empty() {
            return Ok(None);
        }

        for (acronym, file) in accepted {
            let text = self.host.read_file(&project, self.reference, &file.path).await?;

            for line in text.lines() {
                let Some(captures) = self.pattern.captures(line) else {
                    continue;
                };

                let entries = registry.entry(acronym.clone()).or_default();
                entries.push(TargetEntry {
                    project_name: captures["name"].to_string(),
                    url: captures["url_text"].to_string(),
                });
            }
        }

        Ok(Some(registry))
    }
}
