//! # Progress Reporting Module
//!
//! UI feedback for a collection run. Best-effort only: nothing in the
//! engine's correctness depends on a sink seeing every update.
//!
//! ## Components:
//! - `ProgressSink`: the abstract sink the engine reports into,
//!   `(percent, message)` pairs as the per-reference loop advances
//! - `ProgressManager`: indicatif-backed sink for the CLI
//! - `NullProgress`: no-op sink for tests and embedding

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Best-effort sink for run progress
pub trait ProgressSink {
    /// Report overall completion (0-100) with a status message
    fn update(&self, percent: u8, message: &str);
}

/// Sink that discards all updates
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&self, _percent: u8, _message: &str) {}
}

/// Manages the visual progress bar for the CLI
#[derive(Clone)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a percent-scaled progress bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);

        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Finish with a final summary message
    pub fn finish(&self, message: &str) {
        self.bar.set_position(100);
        self.bar.finish_with_message(message.to_string());
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressManager {
    fn update(&self, percent: u8, message: &str) {
        self.bar.set_position(percent.min(100) as u64);
        self.bar.set_message(message.to_string());
    }
}
