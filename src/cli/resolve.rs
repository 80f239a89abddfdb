//! Resolve command implementation.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::core::SvcmapError;
use crate::host::{GitLabClient, RepositoryHost};
use crate::models::TargetRegistry;
use crate::registry::NameResolver;
use crate::store;
use crate::utils::progress::ProgressBar;

/// Build the target registry and save it to `registry.json`.
///
/// The registry is rebuilt fresh on every invocation; there is no merge with
/// prior state. Yielding no registry is a hard error, since every downstream
/// use needs targets to match against.
#[derive(Args)]
pub struct ResolveCommand {}

impl ResolveCommand {
    /// Execute the resolve command.
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let token = settings.host.token()?;
        let client = GitLabClient::new(&settings.host.url, token)?;

        let registry = resolve_registry(&client, settings).await?;

        store::save_json(&settings.output.registry_path(), &registry)?;

        println!(
            "Resolved {} target acronym(s) into {}",
            registry.len(),
            settings.output.registry_path().display()
        );

        Ok(())
    }
}

/// Resolve the target registry, treating "no registry" as a hard stop.
pub(super) async fn resolve_registry<H: RepositoryHost>(
    host: &H,
    settings: &Settings,
) -> Result<TargetRegistry> {
    let patterns = settings.patterns.compile()?;
    let resolver = NameResolver::new(
        host,
        &settings.registry,
        &settings.host.reference,
        patterns.properties,
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Resolving targets from {}",
        settings.registry.config_project
    ));

    let registry = resolver.resolve().await;
    spinner.finish_and_clear();

    registry?.ok_or_else(|| SvcmapError::RegistryEmpty.into())
}
