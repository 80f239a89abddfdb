//! svcmap CLI entry point
//!
//! This is the main executable for the svcmap dependency scanner. It handles
//! command-line argument parsing, error display, and command execution.
//!
//! The CLI supports one command per pipeline phase plus inspection helpers:
//! - `resolve` - build the target registry from the configuration repository
//! - `scan` - scan caller repositories into the acronym catalog
//! - `graph` - build the dependency graph from catalog and registry
//! - `run` - full pipeline in one invocation
//! - `export` - flatten the saved graph into CSV
//! - `integrations` - list bootstrap-declared integrations per project

use anyhow::Result;
use clap::Parser;
use svcmap_cli::cli;
use svcmap_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
