//! Cross-cutting utilities for svcmap.
//!
//! - [`fs`] - atomic file writes for persisted artifacts
//! - [`progress`] - scan progress indicators that respect quiet environments

pub mod fs;
pub mod progress;
