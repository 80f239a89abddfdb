//! Target registry resolution against the in-memory host.

use svcmap_cli::config::Settings;
use svcmap_cli::models::TargetRegistry;
use svcmap_cli::registry::NameResolver;
use svcmap_cli::test_utils::FakeHost;

use super::common;

const CONFIG_PROJECT: &str = "platform/platform-integration-settings";

async fn resolve(host: &FakeHost, settings: &Settings) -> Option<TargetRegistry> {
    let patterns = settings.patterns.compile().unwrap();
    let resolver = NameResolver::new(
        host,
        &settings.registry,
        &settings.host.reference,
        patterns.properties,
    );
    resolver.resolve().await.unwrap()
}

#[tokio::test]
async fn groups_declared_entries_by_acronym() {
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project_at(CONFIG_PROJECT, 10, "platform-integration-settings");
    host.add_file(10, "def-integration.properties", common::integration_file_source());
    host.add_file(10, "ord-integration.properties", "order.items.url = http://order.items\n");

    let registry = resolve(&host, &settings).await.unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry["def"].len(), 2);
    assert_eq!(registry["def"][0].project_name, "def-service.url");
    assert_eq!(registry["def"][0].url, "def-service.internal");
    assert_eq!(registry["ord"][0].project_name, "order.items.url");
}

#[tokio::test]
async fn skips_ignored_and_unknown_files() {
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project_at(CONFIG_PROJECT, 10, "platform-integration-settings");
    host.add_file(10, "def-corp.properties", "corp.url = http://corp\n");
    host.add_file(10, ".gitignore", "*.bak\n");
    host.add_file(10, "unknown-integration.properties", "u.url = http://u\n");
    host.add_file(10, "def-integration.properties", common::integration_file_source());

    let registry = resolve(&host, &settings).await.unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.contains_key("def"));
}

#[tokio::test]
async fn yields_no_registry_when_nothing_qualifies() {
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project_at(CONFIG_PROJECT, 10, "platform-integration-settings");
    host.add_file(10, "unknown-integration.properties", "u.url = http://u\n");

    assert!(resolve(&host, &settings).await.is_none());
}

#[tokio::test]
async fn yields_no_registry_when_the_tree_is_missing() {
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project_at(CONFIG_PROJECT, 10, "platform-integration-settings");
    host.set_tree_missing(10);

    assert!(resolve(&host, &settings).await.is_none());
}

#[tokio::test]
async fn an_integration_file_with_no_url_lines_keeps_an_empty_entry() {
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project_at(CONFIG_PROJECT, 10, "platform-integration-settings");
    host.add_file(10, "def-integration.properties", "timeout.ms = 5000\n");

    let registry = resolve(&host, &settings).await.unwrap();

    assert!(registry["def"].is_empty());
}

#[tokio::test]
async fn commented_lines_still_become_entries() {
    // Registry parsing applies the raw line pattern without the comment skip
    // the properties extractor performs; this asymmetry is documented
    // scanner behavior.
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project_at(CONFIG_PROJECT, 10, "platform-integration-settings");
    host.add_file(10, "def-integration.properties", "#retired.url = http://retired\n");

    let registry = resolve(&host, &settings).await.unwrap();

    assert_eq!(registry["def"].len(), 1);
    assert_eq!(registry["def"][0].project_name, "#retired.url");
}
