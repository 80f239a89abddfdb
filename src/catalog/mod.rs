//! Catalog building: scanning caller repositories into project records.
//!
//! The [`CatalogBuilder`] walks every candidate repository under a scan
//! acronym, filters its file tree into the three extractor groups (Feign
//! client sources, bootstrap files, application-properties files), and
//! assembles a [`ProjectRecord`] per repository.
//!
//! # Incremental semantics
//!
//! The builder is seeded with the previously persisted catalog and never
//! overwrites an existing project key: repositories already recorded under an
//! acronym are skipped wholesale. Re-scans therefore never refresh previously
//! captured data - deliberate staleness tolerance, not a defect. Corrections
//! to an already-scanned repository only surface after an external catalog
//! edit.
//!
//! A repository whose extractors all come back empty contributes no catalog
//! key at all; empty records are never inserted. The acronym key itself is
//! created up front, so an acronym with no qualifying repositories still
//! appears in the catalog as an empty mapping.
//!
//! Scanning is fully sequential: one host request in flight at a time, in
//! tree order. A failure while scanning any repository (other than the
//! recoverable tree-not-found case) aborts the whole run.

use anyhow::Result;

use crate::config::{CompiledPatterns, ScanSettings};
use crate::extract::{BootstrapExtractor, FeignExtractor, PropertiesExtractor};
use crate::host::{RepositoryHost, is_tree_not_found};
use crate::models::{AcronymCatalog, FeignEntry, ProjectHandle, ProjectRecord, TreeEntry};

/// Accumulates project records into an acronym catalog.
///
/// Exclusively owns the catalog mapping while scanning; [`finish`] returns
/// the snapshot and consumes the builder.
///
/// [`finish`]: CatalogBuilder::finish
pub struct CatalogBuilder<'a, H> {
    host: &'a H,
    settings: &'a ScanSettings,
    reference: &'a str,
    feign_folder: regex::Regex,
    feign: FeignExtractor,
    properties: PropertiesExtractor,
    bootstrap: BootstrapExtractor,
    catalog: AcronymCatalog,
}

impl<'a, H: RepositoryHost> CatalogBuilder<'a, H> {
    /// Create a builder seeded with a previously persisted catalog.
    pub fn new(
        host: &'a H,
        settings: &'a ScanSettings,
        reference: &'a str,
        patterns: &CompiledPatterns,
        existing: AcronymCatalog,
    ) -> Self {
        Self {
            host,
            settings,
            reference,
            feign_folder: patterns.feign_folder.clone(),
            feign: FeignExtractor::new(patterns.feign_url.clone()),
            properties: PropertiesExtractor::new(patterns.properties.clone()),
            bootstrap: BootstrapExtractor::new(patterns.bootstrap.clone()),
            catalog: existing,
        }
    }

    /// Scan every candidate repository found for one acronym.
    pub async fn scan_acronym(&mut self, acronym: &str) -> Result<()> {
        let projects = self.host.list_projects(acronym).await?;

        self.catalog.entry(acronym.to_string()).or_default();

        for project in projects {
            if !project.name.ends_with(&self.settings.project_suffix) {
                continue;
            }

            let Some(files) = self.fetch_repo_files(&project).await? else {
                continue;
            };

            let already_recorded = self
                .catalog
                .get(acronym)
                .is_some_and(|projects| projects.contains_key(&project.name));

            if already_recorded {
                tracing::debug!("skipping already cataloged project {}", project.name);
                continue;
            }

            let record = self.scan_project(&project, &files).await?;

            if record.is_empty() {
                tracing::debug!("no findings in {}", project.name);
                continue;
            }

            self.catalog
                .entry(acronym.to_string())
                .or_default()
                .insert(project.name, record);
        }

        Ok(())
    }

    /// Return the accumulated catalog snapshot.
    #[must_use]
    pub fn finish(self) -> AcronymCatalog {
        self.catalog
    }

    /// Fetch and pre-filter one repository's file tree.
    ///
    /// Ignored file names are removed first; `None` means the repository has
    /// no usable folder structure (missing tree or nothing left after the
    /// filter).
    async fn fetch_repo_files(&self, project: &ProjectHandle) -> Result<Option<Vec<TreeEntry>>> {
        let tree = match self.host.list_tree(project, self.reference).await {
            Ok(tree) => tree,
            Err(err) if is_tree_not_found(&err) => {
                tracing::warn!("project {} has no folder structure", project.name);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let files: Vec<TreeEntry> = tree
            .into_iter()
            .filter(|file| !self.settings.ignored_files.contains(&file.name))
            .collect();

        Ok((!files.is_empty()).then_some(files))
    }

    /// Run the three extractor groups over one repository.
    async fn scan_project(
        &self,
        project: &ProjectHandle,
        files: &[TreeEntry],
    ) -> Result<ProjectRecord> {
        let mut record = ProjectRecord::default();

        let feign_files: Vec<&TreeEntry> =
            files.iter().filter(|file| self.feign_folder.is_match(&file.path)).collect();

        let mut feign_entries = Vec::new();
        for file in feign_files {
            let text = self.host.read_file(project, self.reference, &file.path).await?;

            if let Some(url) = self.feign.extract(&text) {
                feign_entries.push(FeignEntry {
                    file: file.name.clone(),
                    url,
                });
            }
        }
        if !feign_entries.is_empty() {
            record.feign = Some(feign_entries);
        }

        // Bootstrap is singular per project: first matching candidate wins.
        for file in files.iter().filter(|f| self.settings.bootstrap_files.contains(&f.name)) {
            let text = self.host.read_file(project, self.reference, &file.path).await?;

            if let Some(integrations) = self.bootstrap.extract(&text) {
                record.bootstrap = Some(integrations);
                break;
            }
        }

        let mut application = std::collections::BTreeMap::new();
        for file in files.iter().filter(|f| self.settings.properties_files.contains(&f.name)) {
            let text = self.host.read_file(project, self.reference, &file.path).await?;
            let entries = self.properties.extract(&text);

            if !entries.is_empty() {
                application.insert(file.name.clone(), entries);
            }
        }
        if !application.is_empty() {
            record.application = Some(application);
        }

        Ok(record)
    }
}
