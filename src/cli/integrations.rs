//! Integrations command implementation.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::models::AcronymCatalog;
use crate::store;

/// List bootstrap-declared target integrations per cataloged project.
///
/// Reads the saved catalog and prints, for every project with a bootstrap
/// finding, the declared upstream acronyms restricted to the known target
/// allow-list. Projects without a bootstrap finding are omitted.
#[derive(Args)]
pub struct IntegrationsCommand {}

impl IntegrationsCommand {
    /// Execute the integrations command.
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let catalog: AcronymCatalog = store::load_or_default(&settings.output.catalog_path());

        if catalog.is_empty() {
            tracing::warn!(
                "no catalog at {}; run 'svcmap scan' first",
                settings.output.catalog_path().display()
            );
            return Ok(());
        }

        for (acronym, projects) in &catalog {
            for (project_name, record) in projects {
                let Some(integrations) =
                    record.integrations(&settings.registry.target_acronyms)
                else {
                    continue;
                };

                println!("{acronym}/{project_name}: {}", integrations.join(", "));
            }
        }

        Ok(())
    }
}
