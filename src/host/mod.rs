//! Repository host boundary.
//!
//! The scanner consumes a repository-hosting API through the
//! [`RepositoryHost`] trait: searching projects, listing file trees, and
//! reading file contents. The production implementation is
//! [`GitLabClient`], a thin `reqwest` wrapper over a GitLab-style v4 REST
//! surface; tests substitute an in-memory fake.
//!
//! # Failure model
//!
//! The only host failure the pipeline recovers from is a missing file tree
//! ([`SvcmapError::TreeNotFound`](crate::core::SvcmapError::TreeNotFound)),
//! which callers catch, log, and treat as "no files". Authentication
//! failures, other HTTP errors, and content-decoding errors all propagate and
//! abort the run; there is no retry policy.
//!
//! All calls are awaited sequentially by the callers - one request in flight
//! at a time, matching the scanner's fully sequential resource model.

pub mod gitlab;

pub use gitlab::GitLabClient;

use anyhow::Result;

use crate::core::SvcmapError;
use crate::models::{ProjectHandle, TreeEntry};

/// The repository-hosting API the scanner consumes.
///
/// Implementations are expected to be cheap to call repeatedly; the scanner
/// issues one `read_file` per candidate file with no batching.
pub trait RepositoryHost {
    /// Search projects by name fragment.
    fn list_projects(
        &self,
        search: &str,
    ) -> impl Future<Output = Result<Vec<ProjectHandle>>> + Send;

    /// Fetch one project by its full namespaced path.
    fn get_project(&self, path: &str) -> impl Future<Output = Result<ProjectHandle>> + Send;

    /// List the recursive file tree of a project at a reference.
    ///
    /// Fails with [`SvcmapError::TreeNotFound`] when the host reports the
    /// repository has no folder structure.
    fn list_tree(
        &self,
        project: &ProjectHandle,
        reference: &str,
    ) -> impl Future<Output = Result<Vec<TreeEntry>>> + Send;

    /// Read one file's content as decoded text.
    ///
    /// The returned string is UTF-8 with literal `\n` escape sequences already
    /// unescaped into real newlines.
    fn read_file(
        &self,
        project: &ProjectHandle,
        reference: &str,
        path: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// True when the error is the recoverable tree-not-found case.
#[must_use]
pub fn is_tree_not_found(error: &anyhow::Error) -> bool {
    matches!(error.downcast_ref::<SvcmapError>(), Some(SvcmapError::TreeNotFound { .. }))
}

/// Decode raw file bytes into scanner text.
///
/// Decodes as UTF-8 and unescapes literal backslash-n sequences into real
/// newlines, an artifact of how the host stores embedded config content.
pub fn decode_content(path: &str, bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes).map_err(|e| SvcmapError::FileDecodeError {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    Ok(text.replace("\\n", "\n"))
}
