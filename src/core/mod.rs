//! Core types and functionality for svcmap
//!
//! This module holds the foundation of svcmap's type system: the strongly-typed
//! error enum, the user-friendly error context used by the CLI, and the
//! conversion helper that maps arbitrary failures onto actionable messages.
//!
//! # Error Management
//!
//! svcmap distinguishes two audiences for errors:
//! - **Code** matches on [`SvcmapError`] variants (the catalog builder catches
//!   [`SvcmapError::TreeNotFound`] and keeps scanning)
//! - **Users** see an [`ErrorContext`] rendered with colors and suggestions via
//!   [`user_friendly_error`]
//!
//! Everything else in the pipeline propagates `anyhow::Result` with `.context()`
//! annotations and is converted at the CLI boundary.

pub mod error;

pub use error::{ErrorContext, SvcmapError, user_friendly_error};
