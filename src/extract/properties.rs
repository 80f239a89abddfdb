//! Application-properties URL extraction.

use regex::Regex;

use crate::models::PropertyEntry;

/// Extracts `name = http(s)://rest-of-url` lines from a properties file.
///
/// Scans line by line; entries whose name begins with the `#` comment marker
/// are skipped. The extractor is deterministic: identical input yields an
/// identical ordered list on repeated calls. A file contributing zero entries
/// is dropped from the enclosing record entirely by the catalog builder.
#[derive(Debug, Clone)]
pub struct PropertiesExtractor {
    pattern: Regex,
}

impl PropertiesExtractor {
    /// Create an extractor around an already-compiled pattern.
    ///
    /// The pattern must expose `name` and `url_text` capture groups.
    #[must_use]
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
        }
    }

    /// Extract all URL-valued property lines, in file order.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<PropertyEntry> {
        let mut entries = Vec::new();

        for line in text.lines() {
            let Some(captures) = self.pattern.captures(line) else {
                continue;
            };

            let variable_name = &captures["name"];
            let url_text = &captures["url_text"];

            if variable_name.starts_with('#') {
                continue;
            }

            entries.push(PropertyEntry {
                variable_name: variable_name.to_string(),
                url_text: url_text.to_string(),
            });
        }

        entries
    }
}
