//! Shared data models for svcmap operations
//!
//! This module provides the data structures flowing between the scanner
//! stages: tree listings from the repository host, the structured findings the
//! extractors produce, the accumulated catalog, the target registry, and the
//! final dependency graph.
//!
//! # Representation choices
//!
//! All mappings are `BTreeMap`s so persisted artifacts serialize in a stable
//! key order; re-running an incremental scan against an unchanged host must
//! produce a byte-identical catalog file.
//!
//! `ProjectRecord` fields are `Option`s serialized only when present. Absence
//! and empty-after-filtering are the same state: an extractor that found
//! nothing leaves its field out of the record entirely.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identifies a file within a scanned repository tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeEntry {
    /// Bare file name (`Client.java`)
    pub name: String,
    /// Full path within the repository (`core/src/main/java/.../Client.java`)
    pub path: String,
}

/// A repository handle returned by a host project search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectHandle {
    /// Host-side project identifier, used for tree and file requests
    pub id: u64,
    /// Repository name (`abc-service-java`)
    pub name: String,
}

/// A Feign client finding: one interpolated base-URL literal per source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeignEntry {
    /// Name of the source file the URL was extracted from
    pub file: String,
    /// The URL property reference with its interpolation wrapper stripped
    pub url: String,
}

/// One `name = http(s)://...` line from an application-properties file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyEntry {
    /// Property key on the left of the `=`
    pub variable_name: String,
    /// Everything after the scheme on the right of the `=`
    pub url_text: String,
}

/// Everything the extractors learned about one caller repository.
///
/// Created once during a scan and immutable thereafter; persisted as part of
/// the catalog. A record with no present field is never inserted into the
/// catalog at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Feign client findings, tagged with their source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feign: Option<Vec<FeignEntry>>,

    /// The semicolon-joined bootstrap integrations string (singular per project)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap: Option<String>,

    /// Property findings keyed by environment file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<BTreeMap<String, Vec<PropertyEntry>>>,
}

impl ProjectRecord {
    /// True when no extractor contributed anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.feign.is_none() && self.bootstrap.is_none() && self.application.is_none()
    }

    /// The deduplicated set of raw Feign URL strings.
    #[must_use]
    pub fn feign_urls(&self) -> BTreeSet<&str> {
        self.feign
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.url.as_str())
            .collect()
    }

    /// The deduplicated URL values recorded for one environment file.
    #[must_use]
    pub fn application_urls(&self, file_name: &str) -> BTreeSet<&str> {
        self.application
            .as_ref()
            .and_then(|files| files.get(file_name))
            .map(|entries| entries.iter().map(|entry| entry.url_text.as_str()).collect())
            .unwrap_or_default()
    }

    /// Bootstrap-declared upstream acronyms, restricted to known targets.
    ///
    /// Splits the integrations string on `;`, trims whitespace, strips the
    /// `-integration` suffix, and keeps only acronyms present in `targets`.
    /// `None` when the project has no bootstrap finding.
    #[must_use]
    pub fn integrations(&self, targets: &[String]) -> Option<Vec<String>> {
        let bootstrap = self.bootstrap.as_deref()?;

        Some(
            bootstrap
                .split(';')
                .map(|integration| integration.trim().replace("-integration", ""))
                .filter(|acronym| targets.iter().any(|t| t == acronym))
                .collect(),
        )
    }
}

/// Accumulated scan results: acronym → project name → record.
///
/// Grows monotonically across runs; existing project keys are never
/// overwritten.
pub type AcronymCatalog = BTreeMap<String, BTreeMap<String, ProjectRecord>>;

/// One declared (project name, base URL) pair from an integration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetEntry {
    /// Declared project property name (often carrying a `.url` suffix)
    pub project_name: String,
    /// Declared base URL, scheme stripped
    pub url: String,
}

/// Known target services: acronym → declared entries.
///
/// Built fresh each run from the fixed configuration repository.
pub type TargetRegistry = BTreeMap<String, Vec<TargetEntry>>;

/// The inferred graph: target acronym → normalized target name → callers.
///
/// Rebuilt fully each run; the caller lists are deduplicated and carry no
/// ordering guarantee.
pub type DependencyGraph = BTreeMap<String, BTreeMap<String, Vec<String>>>;
