//! Artifact persistence round-trips.

use std::collections::BTreeSet;
use std::fs;

use tempfile::TempDir;

use svcmap_cli::models::{AcronymCatalog, DependencyGraph, ProjectRecord, TargetRegistry};
use svcmap_cli::store;

/// Flatten a graph into order-independent (acronym, target, caller) triples.
fn triples(graph: &DependencyGraph) -> BTreeSet<(String, String, BTreeSet<String>)> {
    graph
        .iter()
        .flat_map(|(acronym, targets)| {
            targets.iter().map(move |(target, callers)| {
                (
                    acronym.clone(),
                    target.clone(),
                    callers.iter().cloned().collect::<BTreeSet<_>>(),
                )
            })
        })
        .collect()
}

#[test]
fn graph_round_trip_preserves_all_triples() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.json");

    let mut graph = DependencyGraph::new();
    graph.entry("def".to_string()).or_default().insert(
        "def-service".to_string(),
        vec!["abc-service-java".to_string(), "xyz-service-java".to_string()],
    );
    graph
        .entry("ord".to_string())
        .or_default()
        .insert("order-items".to_string(), vec!["abc-service-java".to_string()]);

    store::save_json(&path, &graph).unwrap();
    let reloaded: DependencyGraph = store::load_or_default(&path);

    // Caller order is not guaranteed; compare as sets.
    assert_eq!(triples(&graph), triples(&reloaded));
}

#[test]
fn registry_round_trip_is_lossless() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("registry.json");

    let mut registry = TargetRegistry::new();
    registry.insert("def".to_string(), Vec::new());

    store::save_json(&path, &registry).unwrap();
    let reloaded: TargetRegistry = store::load_or_default(&path);

    assert_eq!(registry, reloaded);
}

#[test]
fn malformed_artifacts_degrade_to_no_prior_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{\"abc\": [truncated").unwrap();

    let catalog: AcronymCatalog = store::load_or_default(&path);

    assert!(catalog.is_empty());
}

#[test]
fn catalog_record_absence_survives_a_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");

    let mut catalog = AcronymCatalog::new();
    catalog.entry("abc".to_string()).or_default().insert(
        "abc-service-java".to_string(),
        ProjectRecord {
            bootstrap: Some("def-integration".to_string()),
            ..ProjectRecord::default()
        },
    );

    store::save_json(&path, &catalog).unwrap();

    // Absent fields must not appear in the serialized form at all.
    let raw = fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("feign"));
    assert!(!raw.contains("application"));

    let reloaded: AcronymCatalog = store::load_or_default(&path);
    assert_eq!(catalog, reloaded);
}
