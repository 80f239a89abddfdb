//! Export command implementation.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;
use crate::graph::export::to_csv;
use crate::models::DependencyGraph;
use crate::store;
use crate::utils::fs::safe_write;

/// Export the saved dependency graph as `acronym,target,caller` CSV rows.
#[derive(Args)]
pub struct ExportCommand {
    /// Write the CSV to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportCommand {
    /// Execute the export command.
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let graph: DependencyGraph = store::load_or_default(&settings.output.graph_path());

        if graph.is_empty() {
            tracing::warn!(
                "no dependency graph at {}; run 'svcmap graph' first",
                settings.output.graph_path().display()
            );
        }

        let csv = to_csv(&graph);

        match self.output {
            Some(path) => {
                safe_write(&path, &csv)?;
                println!("Exported {} row(s) to {}", csv.lines().count(), path.display());
            }
            None => {
                if !csv.is_empty() {
                    println!("{csv}");
                }
            }
        }

        Ok(())
    }
}
