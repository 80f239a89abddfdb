//! GitLab-style REST implementation of the repository host.

use anyhow::{Context, Result, anyhow};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use super::{RepositoryHost, decode_content};
use crate::core::SvcmapError;
use crate::models::{ProjectHandle, TreeEntry};

/// Page size requested from the host; pages shorter than this end the listing.
const PER_PAGE: usize = 100;

/// Repository host client speaking the GitLab v4 REST API.
///
/// Authenticates with a private token header and pages through listings with
/// page-number paging. Deliberately minimal: no retries, no request timeouts
/// beyond the HTTP client's defaults, one request in flight at a time. A hung
/// call stalls the entire run, which is the documented resource model.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    base_url: Url,
    token: String,
    client: reqwest::Client,
}

impl GitLabClient {
    /// Create a client for the given host base URL and access token.
    pub fn new(base_url: &str, token: String) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid host URL: {base_url}"))?;

        if base_url.cannot_be_a_base() {
            return Err(anyhow!("host URL cannot be used as an API base: {base_url}"));
        }

        Ok(Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        })
    }

    /// Build an API endpoint URL from path segments.
    ///
    /// Segments are pushed individually so embedded slashes (file paths) are
    /// percent-encoded the way the host expects.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| anyhow!("host URL cannot be used as an API base"))?;
            path.extend(["api", "v4"]);
            path.extend(segments);
        }

        Ok(url)
    }

    /// Issue one authenticated GET and map failure statuses.
    async fn get(&self, url: Url, operation: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await
            .with_context(|| format!("host request failed during {operation}"))?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SvcmapError::HostAuthenticationFailed {
                url: self.base_url.to_string(),
            }
            .into());
        }

        if !status.is_success() {
            return Err(SvcmapError::HostRequestFailed {
                operation: operation.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        Ok(response)
    }

    /// Collect a page-numbered listing into one vector.
    async fn get_paged<T: for<'de> Deserialize<'de>>(
        &self,
        base: Url,
        operation: &str,
    ) -> Result<Vec<T>> {
        let mut collected = Vec::new();
        let mut page = 1usize;

        loop {
            let mut url = base.clone();
            url.query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let response = self.get(url, operation).await?;

            let batch: Vec<T> = response
                .json()
                .await
                .with_context(|| format!("invalid host response during {operation}"))?;

            let batch_len = batch.len();
            collected.extend(batch);

            if batch_len < PER_PAGE {
                return Ok(collected);
            }

            page += 1;
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawProject {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawTreeEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct RawFile {
    content: String,
}

impl RepositoryHost for GitLabClient {
    async fn list_projects(&self, search: &str) -> Result<Vec<ProjectHandle>> {
        let mut url = self.endpoint(&["projects"])?;
        url.query_pairs_mut().append_pair("search", search);

        let projects: Vec<RawProject> = self.get_paged(url, "list projects").await?;

        Ok(projects
            .into_iter()
            .map(|project| ProjectHandle {
                id: project.id,
                name: project.name,
            })
            .collect())
    }

    async fn get_project(&self, path: &str) -> Result<ProjectHandle> {
        let url = self.endpoint(&["projects", path])?;

        let response = self.get(url, "get project").await?;

        let project: RawProject =
            response.json().await.context("invalid host response during get project")?;

        Ok(ProjectHandle {
            id: project.id,
            name: project.name,
        })
    }

    async fn list_tree(&self, project: &ProjectHandle, reference: &str) -> Result<Vec<TreeEntry>> {
        let id = project.id.to_string();
        let mut url = self.endpoint(&["projects", &id, "repository", "tree"])?;
        url.query_pairs_mut().append_pair("ref", reference).append_pair("recursive", "true");

        let entries: Vec<RawTreeEntry> =
            match self.get_paged(url, "list repository tree").await {
                Ok(entries) => entries,
                Err(err) => {
                    // A missing tree is the one recoverable host failure.
                    if let Some(SvcmapError::HostRequestFailed {
                        status: 404, ..
                    }) = err.downcast_ref::<SvcmapError>()
                    {
                        return Err(SvcmapError::TreeNotFound {
                            project: project.name.clone(),
                        }
                        .into());
                    }
                    return Err(err);
                }
            };

        Ok(entries
            .into_iter()
            .filter(|entry| entry.kind == "blob")
            .map(|entry| TreeEntry {
                name: entry.name,
                path: entry.path,
            })
            .collect())
    }

    async fn read_file(
        &self,
        project: &ProjectHandle,
        reference: &str,
        path: &str,
    ) -> Result<String> {
        let id = project.id.to_string();
        let mut url = self.endpoint(&["projects", &id, "repository", "files", path])?;
        url.query_pairs_mut().append_pair("ref", reference);

        let response = self.get(url, "read repository file").await?;

        let file: RawFile =
            response.json().await.context("invalid host response during read repository file")?;

        let bytes = BASE64.decode(file.content.replace(['\n', '\r'], "")).map_err(|e| {
            SvcmapError::FileDecodeError {
                path: path.to_string(),
                reason: e.to_string(),
            }
        })?;

        decode_content(path, &bytes)
    }
}
