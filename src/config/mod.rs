//! Configuration management for svcmap
//!
//! This module loads the `svcmap.toml` settings file that drives a scan: the
//! repository host location, the acronym allow-lists, the filename filters, and
//! the extraction patterns. Every component receives its slice of the settings
//! explicitly at construction; there is no ambient global state.
//!
//! # Configuration File Location
//!
//! The settings file is looked up in this order:
//!
//! 1. The `--config` CLI flag
//! 2. The `SVCMAP_CONFIG` environment variable
//! 3. `svcmap.toml` in the current working directory
//! 4. `svcmap/svcmap.toml` under the platform config directory
//!
//! # Security Model
//!
//! The host access token is **never** stored in the settings file. It is read
//! from the environment variable named by `host.token_env` (default
//! `SVCMAP_TOKEN`) so the file can be committed without leaking credentials.
//!
//! # File Format
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
//!
//! [output]
//! dir = "files"
//! ```
//!
//! Sections omitted from the file fall back to the fixed defaults documented
//! on each settings struct. The extraction regexes under `[patterns]` are part
//! of the documented matching semantics; override them only when the scanned
//! conventions genuinely differ.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::SvcmapError;

/// Environment variable that overrides the settings file location.
pub const CONFIG_PATH_ENV: &str = "SVCMAP_CONFIG";

/// Default settings file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "svcmap.toml";

/// Top-level settings for a svcmap run.
///
/// Deserialized from `svcmap.toml`. Each section has its own defaults, so a
/// minimal file only needs the host URL and the two acronym allow-lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Repository host connection settings
    #[serde(default)]
    pub host: HostSettings,

    /// Target registry resolution settings
    #[serde(default)]
    pub registry: RegistrySettings,

    /// Catalog scan settings
    #[serde(default)]
    pub scan: ScanSettings,

    /// Extraction regex patterns
    #[serde(default)]
    pub patterns: PatternSettings,

    /// Artifact output settings
    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// Checks the `SVCMAP_CONFIG` environment variable first, then
    /// `svcmap.toml` in the working directory, then the user-level config
    /// directory.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load settings from an optional explicit path.
    ///
    /// An explicit path (flag or `SVCMAP_CONFIG`) must exist. Without one,
    /// `svcmap.toml` in the working directory is tried first, then the
    /// user-level location under the platform config directory. A missing
    /// file is an error in every case: unlike persisted artifacts, a scan
    /// without its allow-lists cannot do anything useful.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_required(&path).await;
        }

        if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::load_required(Path::new(&env_path)).await;
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local).await;
        }

        if let Some(user) = Self::user_config_path()
            && user.exists()
        {
            return Self::load_from(&user).await;
        }

        Err(SvcmapError::SettingsNotFound {
            path: local.display().to_string(),
        }
        .into())
    }

    async fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SvcmapError::SettingsNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        Self::load_from(path).await
    }

    /// Load settings from a specific file path.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        toml::from_str(&content).map_err(|e| {
            SvcmapError::SettingsParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// The user-level settings location (`<config dir>/svcmap/svcmap.toml`).
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("svcmap").join(DEFAULT_CONFIG_FILE))
    }
}

/// Connection settings for the repository host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostSettings {
    /// Base URL of the repository host API
    pub url: String,

    /// Git reference scanned in every repository
    pub reference: String,

    /// Name of the environment variable holding the access token
    pub token_env: String,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            url: "https://git.example.com".to_string(),
            reference: "master".to_string(),
            token_env: "SVCMAP_TOKEN".to_string(),
        }
    }
}

impl HostSettings {
    /// Read the access token from the configured environment variable.
    pub fn token(&self) -> Result<String> {
        std::env::var(&self.token_env)
            .with_context(|| format!("access token not set in ${}", self.token_env))
    }
}

/// Settings for the name resolver that builds the target registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegistrySettings {
    /// Path of the fixed configuration repository holding integration files
    pub config_project: String,

    /// Allow-list of target acronyms whose integration files are accepted
    pub target_acronyms: Vec<String>,

    /// Suffix stripped from an integration file name to obtain its acronym
    pub integration_suffix: String,

    /// Files whose name contains this suffix are skipped
    pub ignored_suffix: String,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            config_project: "platform/platform-integration-settings".to_string(),
            target_acronyms: Vec::new(),
            integration_suffix: "-integration.properties".to_string(),
            ignored_suffix: "-corp.properties".to_string(),
        }
    }
}

/// Settings for the catalog scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanSettings {
    /// Acronyms searched on the host to discover caller repositories
    pub acronyms: Vec<String>,

    /// Only repositories whose name ends with this suffix are scanned
    pub project_suffix: String,

    /// File names removed from every listed tree before filtering
    pub ignored_files: Vec<String>,

    /// Candidate bootstrap file names; the first match wins
    pub bootstrap_files: Vec<String>,

    /// Recognized application-properties file names
    pub properties_files: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            acronyms: Vec::new(),
            project_suffix: "-java".to_string(),
            ignored_files: vec![".gitignore".to_string()],
            bootstrap_files: vec!["bootstrap.yml".to_string()],
            properties_files: vec![
                "application.properties".to_string(),
                "application-dev.properties".to_string(),
                "application-hml.properties".to_string(),
                "application-prd.properties".to_string(),
            ],
        }
    }
}

/// Regex patterns driving the extractors.
///
/// These defaults encode the documented matching semantics; the matching is
/// regex-driven structural parsing, not a real parser for the underlying
/// formats, and downstream consumers depend on its exact behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatternSettings {
    /// Pattern for an interpolated base-URL literal in a Feign client source
    pub feign_url: String,

    /// Pattern for the integrations block in a bootstrap file (spans newlines)
    pub bootstrap: String,

    /// Pattern for `name = http(s)://rest` lines in properties files
    pub properties: String,

    /// Anchored pattern selecting Feign client source paths within a tree
    pub feign_folder: String,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            feign_url: r#"url\s*=\s*(?P<url_text>"\$\{[^}]+\}")"#.to_string(),
            bootstrap: r"(?s)integrations:\s*(?P<integrations>.*?)(?:\n[a-zA-Z]|\z)".to_string(),
            properties: r"(?P<name>.*?)\s*=\s*(https?://)(?P<url_text>.*)".to_string(),
            feign_folder: r"^.*src/main/java/.*/feign/.*".to_string(),
        }
    }
}

impl PatternSettings {
    /// Compile all patterns, mapping failures to [`SvcmapError::InvalidPattern`].
    pub fn compile(&self) -> Result<CompiledPatterns> {
        Ok(CompiledPatterns {
            feign_url: compile_pattern("feign_url", &self.feign_url)?,
            bootstrap: compile_pattern("bootstrap", &self.bootstrap)?,
            properties: compile_pattern("properties", &self.properties)?,
            feign_folder: compile_pattern("feign_folder", &self.feign_folder)?,
        })
    }
}

fn compile_pattern(name: &str, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| {
        SvcmapError::InvalidPattern {
            name: name.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Compiled form of [`PatternSettings`], built once per run and shared by the
/// extractors and the catalog builder.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    /// Compiled Feign URL pattern
    pub feign_url: Regex,
    /// Compiled bootstrap integrations pattern
    pub bootstrap: Regex,
    /// Compiled properties line pattern
    pub properties: Regex,
    /// Compiled Feign folder path pattern
    pub feign_folder: Regex,
}

/// Artifact output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory receiving `catalog.json`, `registry.json`, and `graph.json`
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("files"),
        }
    }
}

impl OutputSettings {
    /// Path of the persisted acronym catalog.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.dir.join("catalog.json")
    }

    /// Path of the persisted target registry.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.dir.join("registry.json")
    }

    /// Path of the persisted dependency graph.
    #[must_use]
    pub fn graph_path(&self) -> PathBuf {
        self.dir.join("graph.json")
    }
}
