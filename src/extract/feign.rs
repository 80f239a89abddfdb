//! Feign client URL extraction.

use regex::Regex;

/// Extracts the interpolated base-URL literal from a Feign client source file.
///
/// Matches a single fixed pattern identifying a `url = "${...}"` declaration and
/// strips the interpolation wrapper tokens, leaving the bare property
/// reference (`def.service.url` from `"${def.service.url}"`). Applied once per
/// candidate file; the catalog builder tags the result with the originating
/// file name.
#[derive(Debug, Clone)]
pub struct FeignExtractor {
    pattern: Regex,
}

impl FeignExtractor {
    /// Create an extractor around an already-compiled pattern.
    ///
    /// The pattern must expose a `url_text` capture group covering the quoted,
    /// wrapped literal.
    #[must_use]
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
        }
    }

    /// Extract the wrapped URL reference, or `None` when the pattern is absent.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<String> {
        let captures = self.pattern.captures(text)?;
        let url_text = captures.name("url_text")?.as_str();

        Some(url_text.replace("\"${", "").replace("}\"", ""))
    }
}
