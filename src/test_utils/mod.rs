//! Test utilities for svcmap
//!
//! This module provides an in-memory [`FakeHost`] implementing the
//! [`RepositoryHost`] trait, used by unit and integration tests to exercise
//! the catalog builder and name resolver without a network.
//!
//! The module is compiled for tests and behind the `test-utils` feature so
//! the integration suite can use it through the library crate.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::core::SvcmapError;
use crate::host::RepositoryHost;
use crate::models::{ProjectHandle, TreeEntry};

/// In-memory repository host.
///
/// Projects are registered with an id and a name; file contents are attached
/// per project path. A project marked tree-missing reproduces the host's
/// "no folder structure" failure.
#[derive(Debug, Default)]
pub struct FakeHost {
    projects: Vec<ProjectHandle>,
    paths: BTreeMap<String, ProjectHandle>,
    trees: BTreeMap<u64, Vec<TreeEntry>>,
    missing_trees: Vec<u64>,
    files: BTreeMap<(u64, String), String>,
}

impl FakeHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a searchable project and return its handle.
    pub fn add_project(&mut self, id: u64, name: &str) -> ProjectHandle {
        let handle = ProjectHandle {
            id,
            name: name.to_string(),
        };
        self.projects.push(handle.clone());
        self.trees.entry(id).or_default();
        handle
    }

    /// Register a project addressable by its namespaced path.
    pub fn add_project_at(&mut self, path: &str, id: u64, name: &str) -> ProjectHandle {
        let handle = self.add_project(id, name);
        self.paths.insert(path.to_string(), handle.clone());
        handle
    }

    /// Mark a project's tree as missing (the recoverable 404 case).
    pub fn set_tree_missing(&mut self, id: u64) {
        self.trees.remove(&id);
        self.missing_trees.push(id);
    }

    /// Attach a file to a project's tree; the entry name is derived from the
    /// last path segment.
    pub fn add_file(&mut self, id: u64, path: &str, content: &str) {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();

        self.trees.entry(id).or_default().push(TreeEntry {
            name,
            path: path.to_string(),
        });
        self.files.insert((id, path.to_string()), content.to_string());
    }
}

impl RepositoryHost for FakeHost {
    async fn list_projects(&self, search: &str) -> Result<Vec<ProjectHandle>> {
        Ok(self
            .projects
            .iter()
            .filter(|project| project.name.contains(search))
            .cloned()
            .collect())
    }

    async fn get_project(&self, path: &str) -> Result<ProjectHandle> {
        self.paths.get(path).cloned().ok_or_else(|| {
            SvcmapError::HostRequestFailed {
                operation: "get project".to_string(),
                status: 404,
            }
            .into()
        })
    }

    async fn list_tree(&self, project: &ProjectHandle, _reference: &str) -> Result<Vec<TreeEntry>> {
        if self.missing_trees.contains(&project.id) {
            return Err(SvcmapError::TreeNotFound {
                project: project.name.clone(),
            }
            .into());
        }

        self.trees.get(&project.id).cloned().ok_or_else(|| {
            SvcmapError::HostRequestFailed {
                operation: "list repository tree".to_string(),
                status: 404,
            }
            .into()
        })
    }

    async fn read_file(
        &self,
        project: &ProjectHandle,
        _reference: &str,
        path: &str,
    ) -> Result<String> {
        self.files.get(&(project.id, path.to_string())).cloned().ok_or_else(|| {
            SvcmapError::HostRequestFailed {
                operation: "read repository file".to_string(),
                status: 404,
            }
            .into()
        })
    }
}
