//! Dependency graph construction.
//!
//! The [`GraphBuilder`] cross-references the acronym catalog against the
//! target registry and decides edges by substring containment. Matching is
//! intentionally permissive: a declared target name appearing anywhere inside
//! a caller's URL string counts as a dependency, favoring false positives
//! over missed edges.
//!
//! # The two matching rules
//!
//! Feign references and property references are matched under different
//! normalization orders, and the asymmetry is load-bearing:
//!
//! - **Feign rule**: strip the `.url` suffix from the declared name, test the
//!   stripped string (dots intact) against the raw Feign URL, and only
//!   normalize dots to dashes *after* a hit, to form the target identifier.
//! - **Property rule**: fully normalize the declared name first (strip
//!   `.url`, dots to dashes), then test the normalized string against the
//!   property URL.
//!
//! A declared name `order.items.url` therefore matches the dotted URL
//! `https://order.items.internal/api` only under the Feign rule, and the
//! dashed URL `https://order-items.internal/api` only under the Property
//! rule. Both rules strip `.url` with replace-all semantics (every
//! occurrence, anywhere in the name).
//!
//! The graph is rebuilt fully on every run. Callers accumulate per
//! `(acronym, target)` node as a set and are flattened to deduplicated lists
//! by [`GraphBuilder::finish`].

pub mod export;

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{AcronymCatalog, DependencyGraph, ProjectRecord, TargetRegistry};

/// Accumulates dependency edges from caller projects.
///
/// Exclusively owns the in-progress graph; [`finish`] returns the snapshot
/// and consumes the builder.
///
/// [`finish`]: GraphBuilder::finish
pub struct GraphBuilder<'a> {
    registry: &'a TargetRegistry,
    environment_files: &'a [String],
    edges: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder matching against the given registry.
    ///
    /// `environment_files` names the recognized application-properties files
    /// whose URL values form the property reference set.
    pub fn new(registry: &'a TargetRegistry, environment_files: &'a [String]) -> Self {
        Self {
            registry,
            environment_files,
            edges: BTreeMap::new(),
        }
    }

    /// Add every project of a catalog.
    pub fn add_catalog(&mut self, catalog: &AcronymCatalog) {
        for projects in catalog.values() {
            for (project_name, record) in projects {
                self.add_project(project_name, record);
            }
        }
    }

    /// Match one caller project's references against the registry.
    pub fn add_project(&mut self, project_name: &str, record: &ProjectRecord) {
        let feign_urls = record.feign_urls();

        if !feign_urls.is_empty() {
            self.match_feign(&feign_urls, project_name);
        }

        let mut property_urls = BTreeSet::new();
        for file_name in self.environment_files {
            property_urls.extend(record.application_urls(file_name));
        }

        self.match_properties(&property_urls, project_name);
    }

    /// Flatten the accumulated edges into the persisted graph shape.
    #[must_use]
    pub fn finish(self) -> DependencyGraph {
        self.edges
            .into_iter()
            .map(|(acronym, targets)| {
                let targets = targets
                    .into_iter()
                    .map(|(target, callers)| (target, callers.into_iter().collect()))
                    .collect();
                (acronym, targets)
            })
            .collect()
    }

    /// Feign rule: containment test before normalization.
    fn match_feign(&mut self, references: &BTreeSet<&str>, caller: &str) {
        let registry = self.registry;

        for reference in references {
            for (acronym, entries) in registry {
                for entry in entries {
                    let stripped = entry.project_name.replace(".url", "");

                    if reference.contains(&stripped) {
                        let target = stripped.replace('.', "-");
                        self.add_edge(acronym, target, caller);
                    }
                }
            }
        }
    }

    /// Property rule: normalization before the containment test.
    fn match_properties(&mut self, references: &BTreeSet<&str>, caller: &str) {
        let registry = self.registry;

        for reference in references {
            for (acronym, entries) in registry {
                for entry in entries {
                    let target = entry.project_name.replace(".url", "").replace('.', "-");

                    if reference.contains(&target) {
                        self.add_edge(acronym, target, caller);
                    }
                }
            }
        }
    }

    fn add_edge(&mut self, acronym: &str, target: String, caller: &str) {
        self.edges
            .entry(acronym.to_string())
            .or_default()
            .entry(target)
            .or_default()
            .insert(caller.to_string());
    }
}
