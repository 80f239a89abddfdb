//! Command-line interface for svcmap.
//!
//! Each subcommand is implemented in its own module with its own argument
//! struct and execution logic. The commands mirror the phases of the
//! pipeline, so each phase can be run and inspected in isolation:
//!
//! # Available Commands
//!
//! ## Pipeline Phases
//! - `resolve` - build the target registry from the configuration repository
//! - `scan` - scan caller repositories into the acronym catalog (incremental)
//! - `graph` - cross-reference catalog and registry into the dependency graph
//! - `run` - all three phases in sequence
//!
//! ## Inspection
//! - `export` - flatten the saved graph into CSV rows
//! - `integrations` - list bootstrap-declared target integrations per project
//!
//! # Basic Workflow
//!
//! ```bash
//! # One-shot pipeline
//! svcmap run
//!
//! # Or phase by phase
//! svcmap resolve
//! svcmap scan
//! svcmap graph
//!
//! # Inspect results
//! svcmap export --output graph.csv
//! svcmap integrations
//! ```
//!
//! # Global Options
//!
//! All commands support:
//! - `--config <path>` - settings file (default `svcmap.toml`, env `SVCMAP_CONFIG`)
//! - `--verbose` / `--quiet` - output level
//! - `--no-progress` - disable progress indicators for scripts and CI

mod export;
mod graph;
mod integrations;
mod resolve;
mod run;
mod scan;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::utils::progress;

/// Main CLI structure for svcmap.
///
/// Handles global flags and delegates to subcommands. Verbosity flags map to
/// a tracing env-filter default; an explicit `RUST_LOG` always wins.
#[derive(Parser)]
#[command(
    name = "svcmap",
    about = "Infer a microservice dependency graph from repository scans",
    version,
    author,
    long_about = "svcmap statically infers which repositories call which target services \
                  by scanning Feign client declarations, bootstrap integration lists, and \
                  application properties, then matching them against a registry of known \
                  target names."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors for automation.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to the settings file (default `svcmap.toml`).
    #[arg(short, long, global = true, env = "SVCMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Disable progress bars and spinners.
    #[arg(long, global = true)]
    no_progress: bool,
}

/// Available svcmap subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Build the target registry from the configuration repository.
    Resolve(resolve::ResolveCommand),

    /// Scan caller repositories into the acronym catalog (incremental).
    Scan(scan::ScanCommand),

    /// Build the dependency graph from the saved catalog and registry.
    Graph(graph::GraphCommand),

    /// Run the full pipeline: resolve, scan, graph.
    Run(run::RunCommand),

    /// Export the saved dependency graph as CSV rows.
    Export(export::ExportCommand),

    /// List bootstrap-declared target integrations per cataloged project.
    Integrations(integrations::IntegrationsCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        if self.quiet || self.no_progress {
            progress::disable_progress();
        }

        let settings = Settings::load_with_optional(self.config.clone()).await?;

        match self.command {
            Commands::Resolve(cmd) => cmd.execute(&settings).await,
            Commands::Scan(cmd) => cmd.execute(&settings).await,
            Commands::Graph(cmd) => cmd.execute(&settings).await,
            Commands::Run(cmd) => cmd.execute(&settings).await,
            Commands::Export(cmd) => cmd.execute(&settings).await,
            Commands::Integrations(cmd) => cmd.execute(&settings).await,
        }
    }

    fn init_logging(&self) {
        let default_filter = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_filter)),
            )
            .with_target(false)
            .try_init()
            .ok();
    }
}
