//! Graph building: matching rules and the full pipeline.

use std::collections::BTreeMap;

use svcmap_cli::catalog::CatalogBuilder;
use svcmap_cli::graph::GraphBuilder;
use svcmap_cli::models::{
    AcronymCatalog, FeignEntry, ProjectRecord, PropertyEntry, TargetEntry, TargetRegistry,
};
use svcmap_cli::registry::NameResolver;
use svcmap_cli::test_utils::FakeHost;

use super::common;

fn registry_with(acronym: &str, declared: &str) -> TargetRegistry {
    let mut registry = TargetRegistry::new();
    registry.insert(
        acronym.to_string(),
        vec![TargetEntry {
            project_name: declared.to_string(),
            url: "unused".to_string(),
        }],
    );
    registry
}

#[test]
fn feign_matching_succeeds_on_dots_where_property_matching_fails() {
    let settings = common::test_settings();
    let registry = registry_with("ord", "order.items.url");

    // The same dotted URL string, once as a Feign reference and once as a
    // property reference.
    let feign_record = ProjectRecord {
        feign: Some(vec![FeignEntry {
            file: "Client.java".to_string(),
            url: "https://order.items.internal/api".to_string(),
        }]),
        ..ProjectRecord::default()
    };

    let mut application = BTreeMap::new();
    application.insert(
        "application.properties".to_string(),
        vec![PropertyEntry {
            variable_name: "items.url".to_string(),
            url_text: "https://order.items.internal/api".to_string(),
        }],
    );
    let property_record = ProjectRecord {
        application: Some(application),
        ..ProjectRecord::default()
    };

    let mut builder = GraphBuilder::new(&registry, &settings.scan.properties_files);
    builder.add_project("feign-caller-java", &feign_record);
    builder.add_project("property-caller-java", &property_record);
    let graph = builder.finish();

    // Containment on "order.items" (dots intact) hits for the Feign rule and
    // produces the normalized node; the property rule tested "order-items"
    // and missed.
    assert_eq!(graph["ord"]["order-items"], vec!["feign-caller-java".to_string()]);
}

#[test]
fn property_matching_succeeds_on_dashes_where_feign_matching_fails() {
    let settings = common::test_settings();
    let registry = registry_with("ord", "order.items.url");

    let feign_record = ProjectRecord {
        feign: Some(vec![FeignEntry {
            file: "Client.java".to_string(),
            url: "https://order-items.internal/api".to_string(),
        }]),
        ..ProjectRecord::default()
    };

    let mut application = BTreeMap::new();
    application.insert(
        "application.properties".to_string(),
        vec![PropertyEntry {
            variable_name: "items.url".to_string(),
            url_text: "https://order-items.internal/api".to_string(),
        }],
    );
    let property_record = ProjectRecord {
        application: Some(application),
        ..ProjectRecord::default()
    };

    let mut builder = GraphBuilder::new(&registry, &settings.scan.properties_files);
    builder.add_project("feign-caller-java", &feign_record);
    builder.add_project("property-caller-java", &property_record);
    let graph = builder.finish();

    assert_eq!(graph["ord"]["order-items"], vec!["property-caller-java".to_string()]);
}

#[test]
fn catalog_and_registry_produce_the_expected_edge() {
    let settings = common::test_settings();
    let registry = registry_with("def", "def-service.url");

    let mut catalog = AcronymCatalog::new();
    catalog.entry("abc".to_string()).or_default().insert(
        "abc-service-java".to_string(),
        ProjectRecord {
            feign: Some(vec![FeignEntry {
                file: "Client.java".to_string(),
                url: "http://def-service/ping".to_string(),
            }]),
            ..ProjectRecord::default()
        },
    );

    let mut builder = GraphBuilder::new(&registry, &settings.scan.properties_files);
    builder.add_catalog(&catalog);
    let graph = builder.finish();

    assert_eq!(graph["def"]["def-service"], vec!["abc-service-java".to_string()]);
}

#[tokio::test]
async fn full_pipeline_from_host_to_graph() {
    let settings = common::test_settings();
    let patterns = settings.patterns.compile().unwrap();

    let mut host = FakeHost::new();

    // The configuration repository declaring the known targets.
    host.add_project_at(
        "platform/platform-integration-settings",
        10,
        "platform-integration-settings",
    );
    host.add_file(10, "def-integration.properties", common::integration_file_source());

    // A caller repository referencing def-service through Feign and a
    // properties file.
    host.add_project(1, "abc-service-java");
    host.add_file(
        1,
        "src/main/java/com/acme/feign/DefClient.java",
        &common::feign_client_source("def-service.url"),
    );
    host.add_file(
        1,
        "application-prd.properties",
        &common::properties_source("def.service.url", "def-service.internal/api"),
    );

    let resolver = NameResolver::new(
        &host,
        &settings.registry,
        &settings.host.reference,
        patterns.properties.clone(),
    );
    let registry = resolver.resolve().await.unwrap().unwrap();

    let mut builder = CatalogBuilder::new(
        &host,
        &settings.scan,
        &settings.host.reference,
        &patterns,
        AcronymCatalog::new(),
    );
    builder.scan_acronym("abc").await.unwrap();
    let catalog = builder.finish();

    let mut graph_builder = GraphBuilder::new(&registry, &settings.scan.properties_files);
    graph_builder.add_catalog(&catalog);
    let graph = graph_builder.finish();

    assert_eq!(graph["def"]["def-service"], vec!["abc-service-java".to_string()]);
}
