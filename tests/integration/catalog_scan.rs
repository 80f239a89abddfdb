//! Catalog building against the in-memory host.

use svcmap_cli::catalog::CatalogBuilder;
use svcmap_cli::config::Settings;
use svcmap_cli::models::AcronymCatalog;
use svcmap_cli::test_utils::FakeHost;

use super::common;

async fn scan(host: &FakeHost, settings: &Settings, existing: AcronymCatalog) -> AcronymCatalog {
    let patterns = settings.patterns.compile().unwrap();
    let mut builder =
        CatalogBuilder::new(host, &settings.scan, &settings.host.reference, &patterns, existing);

    for acronym in &settings.scan.acronyms {
        builder.scan_acronym(acronym).await.unwrap();
    }

    builder.finish()
}

fn host_with_full_project() -> FakeHost {
    let mut host = FakeHost::new();
    host.add_project(1, "abc-service-java");
    host.add_file(
        1,
        "src/main/java/com/acme/feign/DefClient.java",
        &common::feign_client_source("def.service.url"),
    );
    host.add_file(1, "bootstrap.yml", &common::bootstrap_source("def-integration,ord-integration"));
    host.add_file(
        1,
        "application.properties",
        &common::properties_source("def.service.url", "def-service.internal"),
    );
    host
}

#[tokio::test]
async fn assembles_a_full_project_record() {
    let settings = common::test_settings();
    let host = host_with_full_project();

    let catalog = scan(&host, &settings, AcronymCatalog::new()).await;

    let record = &catalog["abc"]["abc-service-java"];

    let feign = record.feign.as_ref().unwrap();
    assert_eq!(feign.len(), 1);
    assert_eq!(feign[0].file, "DefClient.java");
    assert_eq!(feign[0].url, "def.service.url");

    let bootstrap = record.bootstrap.as_ref().unwrap();
    assert!(bootstrap.contains("def-integration;"));
    assert!(bootstrap.contains("ord-integration"));

    let application = record.application.as_ref().unwrap();
    let entries = &application["application.properties"];
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].variable_name, "def.service.url");
    assert_eq!(entries[0].url_text, "def-service.internal");
}

#[tokio::test]
async fn repositories_without_the_marker_suffix_are_skipped() {
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project(1, "abc-service-docs");
    host.add_file(1, "application.properties", "a.url = http://a\n");

    let catalog = scan(&host, &settings, AcronymCatalog::new()).await;

    assert!(catalog["abc"].is_empty());
}

#[tokio::test]
async fn a_project_with_no_findings_contributes_no_key() {
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project(1, "abc-empty-java");
    host.add_file(1, "src/main/java/com/acme/Service.java", "public class Service {}\n");

    let catalog = scan(&host, &settings, AcronymCatalog::new()).await;

    // The acronym key exists, the project key does not.
    assert!(catalog.contains_key("abc"));
    assert!(!catalog["abc"].contains_key("abc-empty-java"));
}

#[tokio::test]
async fn a_missing_tree_skips_the_repository() {
    let settings = common::test_settings();
    let mut host = host_with_full_project();
    host.add_project(2, "abc-broken-java");
    host.set_tree_missing(2);

    let catalog = scan(&host, &settings, AcronymCatalog::new()).await;

    assert!(catalog["abc"].contains_key("abc-service-java"));
    assert!(!catalog["abc"].contains_key("abc-broken-java"));
}

#[tokio::test]
async fn trees_reduced_to_ignored_files_count_as_missing() {
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project(1, "abc-bare-java");
    host.add_file(1, ".gitignore", "target/\n");

    let catalog = scan(&host, &settings, AcronymCatalog::new()).await;

    assert!(!catalog["abc"].contains_key("abc-bare-java"));
}

#[tokio::test]
async fn existing_records_are_never_overwritten() {
    let settings = common::test_settings();
    let host = host_with_full_project();

    let first = scan(&host, &settings, AcronymCatalog::new()).await;

    // Second run seeded with the first run's snapshot must not touch it, even
    // though the fake host would now produce identical findings again.
    let second = scan(&host, &settings, first.clone()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn rescanning_an_unchanged_host_is_byte_identical() {
    let settings = common::test_settings();
    let host = host_with_full_project();

    let first = scan(&host, &settings, AcronymCatalog::new()).await;
    let second = scan(&host, &settings, first.clone()).await;

    let first_bytes = serde_json::to_string(&first).unwrap();
    let second_bytes = serde_json::to_string(&second).unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[tokio::test]
async fn bootstrap_uses_only_the_first_matching_candidate() {
    let mut settings = common::test_settings();
    settings.scan.bootstrap_files =
        vec!["bootstrap.yml".to_string(), "bootstrap-extra.yml".to_string()];

    let mut host = FakeHost::new();
    host.add_project(1, "abc-service-java");
    host.add_file(1, "bootstrap.yml", &common::bootstrap_source("def-integration"));
    host.add_file(1, "bootstrap-extra.yml", &common::bootstrap_source("ord-integration"));

    let catalog = scan(&host, &settings, AcronymCatalog::new()).await;

    let bootstrap = catalog["abc"]["abc-service-java"].bootstrap.as_ref().unwrap();
    assert!(bootstrap.contains("def-integration"));
    assert!(!bootstrap.contains("ord-integration"));
}

#[tokio::test]
async fn properties_files_with_no_url_lines_are_dropped() {
    let settings = common::test_settings();
    let mut host = FakeHost::new();
    host.add_project(1, "abc-service-java");
    host.add_file(1, "application.properties", "spring.profiles.active = dev\n");
    host.add_file(
        1,
        "application-prd.properties",
        &common::properties_source("def.service.url", "def-service.internal"),
    );

    let catalog = scan(&host, &settings, AcronymCatalog::new()).await;

    let application = catalog["abc"]["abc-service-java"].application.as_ref().unwrap();
    assert!(!application.contains_key("application.properties"));
    assert!(application.contains_key("application-prd.properties"));
}

#[tokio::test]
async fn escaped_newlines_in_file_content_are_unescaped() {
    // The host stores embedded config content with literal \n sequences; the
    // host boundary unescapes them before extraction. The fake host returns
    // content verbatim, so this exercises the decode helper directly.
    let decoded = svcmap_cli::host::decode_content(
        "bootstrap.yml",
        b"integrations: def-integration\\nserver: x",
    )
    .unwrap();

    assert_eq!(decoded, "integrations: def-integration\nserver: x");
}
