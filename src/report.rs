//! # Run Report Module
//!
//! Per-file outcomes and their aggregation over one collection run.
//!
//! ## Tracked counters:
//! - **references_processed**: references the engine looked at
//! - **copied / source_missing / failed**: per-file copy outcomes
//! - **skipped**: references dropped by classification (no padding
//!   token in a template believed to be a sequence)
//! - **cancelled**: the run stopped submitting new work early
//!
//! Workers return their `Outcome` through the pool's join handles; the
//! coordinator drains them and folds into the report, so the counters
//! themselves never see concurrent writes.

/// Result of one copy job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copied,
    SourceMissing,
    Failed(String),
}

/// Aggregated outcome of one collection invocation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub references_processed: usize,
    pub copied: usize,
    pub source_missing: usize,
    pub failed: usize,
    pub skipped: usize,
    pub cancelled: bool,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one copy outcome into the counters
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Copied => self.copied += 1,
            Outcome::SourceMissing => self.source_missing += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn add_reference(&mut self) {
        self.references_processed += 1;
    }

    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    /// True when any per-file outcome was not a clean copy
    pub fn has_failures(&self) -> bool {
        self.source_missing > 0 || self.failed > 0 || self.skipped > 0
    }

    pub fn format_summary(&self) -> String {
        format!(
            "References: {} | Copied: {} | Missing: {} | Failed: {} | Skipped: {}{}",
            self.references_processed,
            self.copied,
            self.source_missing,
            self.failed,
            self.skipped,
            if self.cancelled { " | CANCELLED" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut report = RunReport::new();
        report.record(&Outcome::Copied);
        report.record(&Outcome::Copied);
        report.record(&Outcome::SourceMissing);
        report.record(&Outcome::Failed("disk full".to_string()));

        assert_eq!(report.copied, 2);
        assert_eq!(report.source_missing, 1);
        assert_eq!(report.failed, 1);
        assert!(report.has_failures());
    }

    #[test]
    fn test_clean_run_has_no_failures() {
        let mut report = RunReport::new();
        report.add_reference();
        report.record(&Outcome::Copied);
        assert!(!report.has_failures());
        assert!(!report.cancelled);
    }

    #[test]
    fn test_summary_marks_cancellation() {
        let mut report = RunReport::new();
        report.cancelled = true;
        assert!(report.format_summary().contains("CANCELLED"));
    }
}
