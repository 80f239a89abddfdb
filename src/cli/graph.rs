//! Graph command implementation.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::core::SvcmapError;
use crate::graph::GraphBuilder;
use crate::models::{AcronymCatalog, DependencyGraph, TargetRegistry};
use crate::store;

/// Build the dependency graph from the saved catalog and registry.
///
/// The graph is transient per run: it is recomputed from the current catalog
/// and registry snapshots and overwrites `graph.json` wholesale.
#[derive(Args)]
pub struct GraphCommand {}

impl GraphCommand {
    /// Execute the graph command.
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let catalog: AcronymCatalog = store::load_or_default(&settings.output.catalog_path());
        let registry: TargetRegistry = store::load_or_default(&settings.output.registry_path());

        if registry.is_empty() {
            return Err(SvcmapError::RegistryEmpty.into());
        }

        let graph = build_graph(&catalog, &registry, settings);

        let edges: usize = graph
            .values()
            .flat_map(|targets| targets.values())
            .map(|callers| callers.len())
            .sum();

        store::save_json(&settings.output.graph_path(), &graph)?;

        println!(
            "Recorded {} edge(s) across {} target acronym(s) into {}",
            edges,
            graph.len(),
            settings.output.graph_path().display()
        );

        Ok(())
    }
}

/// Cross-reference a catalog against a registry.
pub(super) fn build_graph(
    catalog: &AcronymCatalog,
    registry: &TargetRegistry,
    settings: &Settings,
) -> DependencyGraph {
    let mut builder = GraphBuilder::new(registry, &settings.scan.properties_files);
    builder.add_catalog(catalog);
    builder.finish()
}
