//! Scan command implementation.

use anyhow::Result;
use clap::Args;

use crate::catalog::CatalogBuilder;
use crate::config::Settings;
use crate::host::{GitLabClient, RepositoryHost};
use crate::models::AcronymCatalog;
use crate::store;
use crate::utils::progress::ProgressBar;

/// Scan caller repositories into the acronym catalog.
///
/// The scan is incremental: the previously saved catalog is loaded first and
/// repositories already recorded under an acronym are skipped. Captured data
/// is never refreshed; delete entries from `catalog.json` to force a rescan.
#[derive(Args)]
pub struct ScanCommand {}

impl ScanCommand {
    /// Execute the scan command.
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let token = settings.host.token()?;
        let client = GitLabClient::new(&settings.host.url, token)?;

        let catalog = build_catalog(&client, settings).await?;

        let projects: usize = catalog.values().map(|projects| projects.len()).sum();

        store::save_json(&settings.output.catalog_path(), &catalog)?;

        println!(
            "Cataloged {} project(s) under {} acronym(s) into {}",
            projects,
            catalog.len(),
            settings.output.catalog_path().display()
        );

        Ok(())
    }
}

/// Scan all configured acronyms on top of the persisted catalog.
pub(super) async fn build_catalog<H: RepositoryHost>(
    host: &H,
    settings: &Settings,
) -> Result<AcronymCatalog> {
    let patterns = settings.patterns.compile()?;
    let existing: AcronymCatalog = store::load_or_default(&settings.output.catalog_path());

    let mut builder = CatalogBuilder::new(
        host,
        &settings.scan,
        &settings.host.reference,
        &patterns,
        existing,
    );

    let progress = ProgressBar::new(settings.scan.acronyms.len() as u64);

    for acronym in &settings.scan.acronyms {
        progress.set_message(format!("Scanning acronym {acronym}"));
        builder.scan_acronym(acronym).await?;
        progress.inc(1);
    }

    progress.finish_and_clear();

    Ok(builder.finish())
}
