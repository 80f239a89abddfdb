//! Error handling for svcmap
//!
//! This module provides the error types and user-friendly error reporting used
//! across the scanner. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! Two main types cooperate here:
//! - [`SvcmapError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! - **Repository host**: [`SvcmapError::TreeNotFound`], [`SvcmapError::HostRequestFailed`],
//!   [`SvcmapError::HostAuthenticationFailed`]
//! - **Configuration**: [`SvcmapError::SettingsNotFound`], [`SvcmapError::SettingsParseError`]
//! - **Content decoding**: [`SvcmapError::FileDecodeError`]
//! - **Graph stage**: [`SvcmapError::RegistryEmpty`]
//!
//! Note that [`SvcmapError::TreeNotFound`] is the one host failure the pipeline
//! recovers from: a repository without a folder structure is skipped, everything
//! else aborts the run. There is no retry policy anywhere.
//!
//! Use [`user_friendly_error`] to convert any error into a display-ready format
//! with contextual suggestions.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for svcmap operations.
///
/// Each variant represents a specific failure mode with enough context for both
/// programmatic matching (the catalog builder catches [`TreeNotFound`] and moves
/// on) and user-facing display.
///
/// [`TreeNotFound`]: SvcmapError::TreeNotFound
#[derive(Error, Debug)]
pub enum SvcmapError {
    /// The host reported that a repository has no file tree.
    ///
    /// This maps the host's "404 Tree Not Found" response. It is caught during
    /// catalog building and treated as "no files"; the scan continues with the
    /// next repository.
    #[error("repository '{project}' has no folder structure")]
    TreeNotFound {
        /// The repository whose tree listing failed
        project: String,
    },

    /// A request to the repository host failed.
    #[error("host request failed during {operation}: HTTP {status}")]
    HostRequestFailed {
        /// The host operation that failed (e.g., "list projects", "read file")
        operation: String,
        /// The HTTP status returned by the host
        status: u16,
    },

    /// The repository host rejected the configured access token.
    #[error("host authentication failed for {url}")]
    HostAuthenticationFailed {
        /// The host base URL that rejected the credentials
        url: String,
    },

    /// File content fetched from the host could not be decoded.
    ///
    /// Covers both invalid base64 payloads and non-UTF-8 content. Decoding
    /// failures are not handled locally; they abort the run.
    #[error("cannot decode content of '{path}': {reason}")]
    FileDecodeError {
        /// Repository path of the undecodable file
        path: String,
        /// What went wrong while decoding
        reason: String,
    },

    /// The settings file does not exist.
    #[error("settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was searched
        path: String,
    },

    /// The settings file exists but could not be parsed.
    #[error("invalid settings file {file}: {reason}")]
    SettingsParseError {
        /// The settings file path
        file: String,
        /// The parse failure reason
        reason: String,
    },

    /// A regex pattern in the settings failed to compile.
    #[error("invalid pattern '{name}': {reason}")]
    InvalidPattern {
        /// Which pattern failed (feign_url, bootstrap, properties, feign_folder)
        name: String,
        /// The regex compile error
        reason: String,
    },

    /// The name resolver found no qualifying integration files.
    ///
    /// Without a target registry the graph stage has nothing to match against,
    /// so this is a hard stop for graph building.
    #[error("no integration files found in the configuration repository")]
    RegistryEmpty,

    /// IO error wrapper for standard library IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error wrapper
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic catch-all error for cases not covered by specific variants
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// User-friendly error wrapper with optional suggestion and details.
///
/// Rendered to stderr with color coding: the error in red, details in yellow,
/// the suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying svcmap error
    pub error: SvcmapError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`SvcmapError`].
    #[must_use]
    pub const fn new(error: SvcmapError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly format with contextual suggestions.
///
/// Downcasts known error types ([`SvcmapError`], [`std::io::Error`],
/// [`toml::de::Error`]) and maps them to tailored suggestions; everything else
/// falls through to a generic context that preserves the full error chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(svcmap_error) = error.downcast_ref::<SvcmapError>() {
        return create_error_context(svcmap_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(SvcmapError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check file ownership or run with elevated permissions")
                .with_details(
                    "svcmap does not have permission to read or write one of its artifacts",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(SvcmapError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check that the path exists and is spelled correctly");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(SvcmapError::SettingsParseError {
            file: "svcmap.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion(
            "Check the TOML syntax in your svcmap.toml. Verify quotes, brackets, and table headers",
        );
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(SvcmapError::Other {
        message,
    })
}

/// Map each [`SvcmapError`] variant to a context with tailored suggestions.
fn create_error_context(error: &SvcmapError) -> ErrorContext {
    match error {
        SvcmapError::TreeNotFound {
            project,
        } => ErrorContext::new(SvcmapError::TreeNotFound {
            project: project.clone(),
        })
        .with_details("The repository exists but its file tree could not be listed"),

        SvcmapError::HostAuthenticationFailed {
            url,
        } => ErrorContext::new(SvcmapError::HostAuthenticationFailed {
            url: url.clone(),
        })
        .with_suggestion("Set a valid access token in the SVCMAP_TOKEN environment variable")
        .with_details("The host rejected the token with HTTP 401/403"),

        SvcmapError::HostRequestFailed {
            operation,
            status,
        } => ErrorContext::new(SvcmapError::HostRequestFailed {
            operation: operation.clone(),
            status: *status,
        })
        .with_suggestion("Check the host URL in svcmap.toml and your network connectivity")
        .with_details("svcmap has no retry policy; rerun once the host is reachable"),

        SvcmapError::FileDecodeError {
            path,
            reason,
        } => ErrorContext::new(SvcmapError::FileDecodeError {
            path: path.clone(),
            reason: reason.clone(),
        })
        .with_details("Scanned files must decode as UTF-8 text"),

        SvcmapError::SettingsNotFound {
            path,
        } => ErrorContext::new(SvcmapError::SettingsNotFound {
            path: path.clone(),
        })
        .with_suggestion(
            "Create a svcmap.toml in the working directory or point --config at one",
        ),

        SvcmapError::SettingsParseError {
            file,
            reason,
        } => ErrorContext::new(SvcmapError::SettingsParseError {
            file: file.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Check the TOML syntax of the settings file"),

        SvcmapError::InvalidPattern {
            name,
            reason,
        } => ErrorContext::new(SvcmapError::InvalidPattern {
            name: name.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Fix the regular expression under [patterns] in svcmap.toml"),

        SvcmapError::RegistryEmpty => ErrorContext::new(SvcmapError::RegistryEmpty)
            .with_suggestion(
                "Check registry.config_project and registry.target_acronyms in svcmap.toml",
            )
            .with_details(
                "Without declared targets the dependency graph is necessarily empty",
            ),

        SvcmapError::IoError(e) => ErrorContext::new(SvcmapError::Other {
            message: format!("IO error: {e}"),
        }),

        SvcmapError::JsonError(e) => ErrorContext::new(SvcmapError::Other {
            message: format!("JSON error: {e}"),
        }),

        SvcmapError::Other {
            message,
        } => ErrorContext::new(SvcmapError::Other {
            message: message.clone(),
        }),
    }
}
