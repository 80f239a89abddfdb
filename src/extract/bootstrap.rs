//! Bootstrap integrations extraction.

use regex::Regex;

/// Extracts the integrations block from a bootstrap configuration file.
///
/// The pattern spans newlines (dot-matches-newline) because the block is
/// usually a wrapped, comma-separated YAML scalar. The captured block is
/// normalized into the catalog's singular form: comma separators become
/// semicolons and embedded newlines are removed. Only the first matching file
/// among the candidates contributes - bootstrap is modeled as singular per
/// project.
#[derive(Debug, Clone)]
pub struct BootstrapExtractor {
    pattern: Regex,
}

impl BootstrapExtractor {
    /// Create an extractor around an already-compiled pattern.
    ///
    /// The pattern must expose an `integrations` capture group.
    #[must_use]
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
        }
    }

    /// Extract the normalized integrations string, or `None` without a match.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<String> {
        let captures = self.pattern.captures(text)?;
        let integrations = captures.name("integrations")?.as_str();

        Some(integrations.replace(',', ";").replace('\n', ""))
    }
}
