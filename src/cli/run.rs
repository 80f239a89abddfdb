//! Run command implementation: the full pipeline in one invocation.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::host::GitLabClient;
use crate::store;

use super::{graph, resolve, scan};

/// Run the full pipeline: resolve targets, scan callers, build the graph.
///
/// Equivalent to `svcmap resolve && svcmap scan && svcmap graph`, sharing one
/// host client. Each phase's artifact is saved as soon as the phase
/// completes, so a failure mid-run keeps everything already finished.
#[derive(Args)]
pub struct RunCommand {}

impl RunCommand {
    /// Execute the run command.
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let token = settings.host.token()?;
        let client = GitLabClient::new(&settings.host.url, token)?;

        println!("Resolving target registry");
        let registry = resolve::resolve_registry(&client, settings).await?;
        store::save_json(&settings.output.registry_path(), &registry)?;
        println!("Resolved {} target acronym(s)", registry.len());

        println!("Scanning caller repositories");
        let catalog = scan::build_catalog(&client, settings).await?;
        store::save_json(&settings.output.catalog_path(), &catalog)?;
        let projects: usize = catalog.values().map(|p| p.len()).sum();
        println!("Cataloged {projects} project(s)");

        println!("Building dependency graph");
        let dependency_graph = graph::build_graph(&catalog, &registry, settings);
        store::save_json(&settings.output.graph_path(), &dependency_graph)?;

        let edges: usize = dependency_graph
            .values()
            .flat_map(|targets| targets.values())
            .map(|callers| callers.len())
            .sum();
        println!(
            "Recorded {} edge(s) into {}",
            edges,
            settings.output.graph_path().display()
        );

        Ok(())
    }
}
