//! Progress indicators for scan operations.
//!
//! Thin wrapper over `indicatif` with consistent styling. Progress output is
//! disabled entirely when the `SVCMAP_NO_PROGRESS` environment variable is
//! set, which the CLI wires to `--no-progress` and `--quiet` for CI and
//! script use.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static PROGRESS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable all progress indicators for the rest of the process.
///
/// Wired to `--no-progress` and `--quiet` by the CLI.
pub fn disable_progress() {
    PROGRESS_DISABLED.store(true, Ordering::Relaxed);
}

fn is_progress_disabled() -> bool {
    PROGRESS_DISABLED.load(Ordering::Relaxed) || std::env::var("SVCMAP_NO_PROGRESS").is_ok()
}

fn bar_style() -> IndicatifStyle {
    IndicatifStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| IndicatifStyle::default_bar())
        .progress_chars("=> ")
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
}

/// A progress bar with consistent styling.
///
/// When progress is disabled the bar is hidden and silently ignores all
/// operations, so call sites never need to branch.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Create a progress bar tracking `len` work units.
    #[must_use]
    pub fn new(len: u64) -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new(len);
            bar.set_style(bar_style());
            bar
        };
        Self {
            inner: bar,
        }
    }

    /// Create a spinner for work of unknown length.
    #[must_use]
    pub fn new_spinner() -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self {
            inner: bar,
        }
    }

    /// Set the message shown alongside the indicator.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Advance the bar by `delta` units.
    pub fn inc(&self, delta: u64) {
        self.inner.inc(delta);
    }

    /// Finish and keep a final message on screen.
    pub fn finish_with_message(&self, msg: impl Into<String>) {
        self.inner.finish_with_message(msg.into());
    }

    /// Finish and remove the indicator.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}
