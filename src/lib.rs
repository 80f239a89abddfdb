//! svcmap - static microservice dependency-graph inference
//!
//! svcmap scans microservice source repositories on a GitLab-style host for
//! three structural clues - Feign client declarations, bootstrap integration
//! lists, and `application*.properties` URL settings - and matches the
//! extracted strings against a registry of known target service names. The
//! result is a dependency graph: for each known target service, the set of
//! caller repositories that appear to invoke it.
//!
//! # Architecture Overview
//!
//! The pipeline has three phases, each with its own persisted JSON artifact:
//!
//! ```text
//! 1. Resolve
//!    └── configuration repository → NameResolver → registry.json
//!
//! 2. Scan (incremental)
//!    └── caller repositories → Extractors → CatalogBuilder → catalog.json
//!
//! 3. Graph (rebuilt each run)
//!    └── {catalog, registry} → GraphBuilder → graph.json
//! ```
//!
//! Matching is static and intentionally permissive: svcmap never executes
//! code or resolves real network topology, and substring containment decides
//! edges, so false positives and negatives are an accepted trade-off.
//!
//! # Core Modules
//!
//! ## Pipeline
//! - [`extract`] - regex extractors turning file text into structured findings
//! - [`catalog`] - incremental scan of caller repositories into project records
//! - [`registry`] - target registry resolution from the configuration repository
//! - [`graph`] - the matching engine that decides dependency edges
//!
//! ## Boundaries
//! - [`host`] - repository-host API trait and its GitLab REST implementation
//! - [`store`] - JSON artifact persistence with degrade-to-empty loading
//! - [`config`] - `svcmap.toml` settings passed explicitly into each component
//!
//! ## Supporting Modules
//! - [`cli`] - command-line interface, one subcommand per pipeline phase
//! - [`core`] - error types and user-facing error contexts
//! - [`models`] - shared data model for records, registry, and graph
//! - [`utils`] - atomic file writes and progress indicators
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Full pipeline against the configured host
//! svcmap run
//!
//! # Phases individually
//! svcmap resolve
//! svcmap scan
//! svcmap graph
//!
//! # Inspect the results
//! svcmap export --output graph.csv
//! svcmap integrations
//! ```
//!
//! # Settings (svcmap.toml)
//!
//! ```toml
//! [host]
//! url = "https://git.example.com"
//! reference = "master"
//!
//! [registry]
//! config_project = "platform/platform-integration-settings"
//! target_acronyms = ["ord", "pay"]
//!
//! [scan]
//! acronyms = ["abc", "xyz"]
//! ```
//!
//! The host access token is read from the `SVCMAP_TOKEN` environment
//! variable, never from the settings file.

// Pipeline
pub mod catalog;
pub mod extract;
pub mod graph;
pub mod registry;

// Boundaries
pub mod config;
pub mod host;
pub mod store;

// Supporting modules
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
