//! Stage progress reporting
//!
//! A single spinner tracks the pipeline stages (rasterize, place, accent,
//! export). Quiet runs report nothing.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Reports pipeline stages to the terminal
///
/// Suppressed entirely in quiet mode; the pipeline itself never prints.
pub struct StageReporter {
    spinner: Option<ProgressBar>,
}

impl StageReporter {
    /// Create a reporter; `quiet` suppresses all output
    pub fn new(quiet: bool) -> Self {
        let spinner = (!quiet).then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(STAGE_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        });
        Self { spinner }
    }

    /// A reporter that never prints
    pub const fn silent() -> Self {
        Self { spinner: None }
    }

    /// Announce the stage currently running
    pub fn stage(&self, message: &str) {
        if let Some(ref bar) = self.spinner {
            bar.set_message(message.to_string());
        }
    }

    /// Clear the spinner and print a final summary line
    pub fn finish(&self, message: &str) {
        if let Some(ref bar) = self.spinner {
            bar.finish_with_message(message.to_string());
        }
    }
}
