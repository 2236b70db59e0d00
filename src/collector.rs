//! # Collection Engine Module
//!
//! The orchestrator that walks the host's asset references and copies
//! everything they point at into `output_root/footage/`.
//!
//! ## Flow per run:
//! 1. **Preflight**: create the footage directory; failure here is
//!    fatal and aborts before any copying starts
//! 2. **Per-reference loop**: classify each reference in host order
//! 3. **Single files**: copied inline on the coordinator, never
//!    through the pool
//! 4. **Sequences**: expanded into per-frame jobs and dispatched to a
//!    semaphore-bounded worker pool; the batch is drained before the
//!    next reference starts
//! 5. **Write-back**: after a non-cancelled run, every collected
//!    reference's path is rewritten to its new relative location
//!
//! ## Classification:
//! - no path, or flagged render-only: excluded, never an error
//! - video-container extension: single file, regardless of any frame
//!   range (containers encode their own frames)
//! - frame range with `first != last`: multi-file sequence
//! - anything else (no range, or a degenerate `first == last` range):
//!   single file; a degenerate range still gets its one frame number
//!   substituted into the template
//!
//! ## Cancellation:
//! Polled before each reference and before each job submission. Once
//! observed, no new work is submitted; jobs already in flight drain to
//! completion and partial copies are acceptable.
//!
//! ## Failure isolation:
//! All copies funnel through `copy_one`, which records `SourceMissing`
//! or `Failed` instead of raising. One bad frame never aborts a batch,
//! and a batch never aborts the run.

use crate::{
    asset::{AssetReference, AssetSource, ExtensionClass},
    cancel::CancelFlag,
    config::Config,
    error::CollectError,
    padding::PaddingSpec,
    progress::ProgressSink,
    report::{Outcome, RunReport},
    sequence::{self, CopyJob},
};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// How the engine will collect one reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    /// No path set, or a render-output-only node
    Excluded,
    SingleFile,
    Sequence { first: i64, last: i64 },
}

/// Sequence-aware concurrent footage collector
pub struct CollectionEngine {
    config: Config,
}

impl CollectionEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: Config) -> Result<Self, CollectError> {
        config
            .validate()
            .map_err(|e| CollectError::Validation(e.to_string()))?;
        Ok(Self { config })
    }

    /// Collect every reference exposed by `source` into
    /// `output_root/footage/`, then rewrite the reference paths.
    ///
    /// Per-file failures are recorded in the returned [`RunReport`];
    /// only an unusable output root aborts the run. Paths are written
    /// back through `source` only when the run was not cancelled.
    pub async fn collect(
        &self,
        source: &mut dyn AssetSource,
        output_root: &Path,
        cancel: &CancelFlag,
        progress: &dyn ProgressSink,
    ) -> Result<RunReport, CollectError> {
        let footage_root = output_root.join("footage");
        tokio::fs::create_dir_all(&footage_root)
            .await
            .map_err(|e| CollectError::DestinationUnavailable {
                path: footage_root.clone(),
                source: e,
            })?;

        let references = source.asset_references();
        info!(
            "Collecting {} references into {}",
            references.len(),
            footage_root.display()
        );

        let mut report = RunReport::new();
        if references.is_empty() {
            return Ok(report);
        }

        let semaphore = Arc::new(Semaphore::new(self.config.workers));
        let total = references.len();

        for (index, reference) in references.iter().enumerate() {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            let percent = (index * 100 / total) as u8;
            progress.update(percent, &format!("Processing node: {}", reference.name));

            match self.classify(reference) {
                Classification::Excluded => {
                    debug!("Skipping excluded reference: {}", reference.name);
                }
                Classification::SingleFile => {
                    report.add_reference();
                    let outcome = self.collect_single(reference, &footage_root).await;
                    report.record(&outcome);
                }
                Classification::Sequence { first, last } => {
                    report.add_reference();
                    self.collect_sequence(
                        reference,
                        &footage_root,
                        first,
                        last,
                        &semaphore,
                        cancel,
                        progress,
                        percent,
                        &mut report,
                    )
                    .await;
                    if report.cancelled {
                        break;
                    }
                }
            }
        }

        if !report.cancelled {
            self.rewrite_references(source, &references);
        }

        info!("{}", report.format_summary());
        Ok(report)
    }

    fn classify(&self, reference: &AssetReference) -> Classification {
        if reference.path.is_empty() || reference.render_only {
            return Classification::Excluded;
        }

        if reference.extension_class(&self.config.video_extensions) == ExtensionClass::Video {
            return Classification::SingleFile;
        }

        match reference.frame_range {
            Some((first, last)) if first != last => Classification::Sequence { first, last },
            _ => Classification::SingleFile,
        }
    }

    /// Copy a single-file reference inline on the coordinator.
    ///
    /// A degenerate frame range (`first == last`) still carries a
    /// template; its one frame number is substituted once here rather
    /// than routed through the sequence path.
    async fn collect_single(&self, reference: &AssetReference, footage_root: &Path) -> Outcome {
        let path = Path::new(&reference.path);
        let template = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let filename = match reference.frame_range {
            Some((first, _))
                if reference.extension_class(&self.config.video_extensions)
                    == ExtensionClass::Generic =>
            {
                PaddingSpec::parse(&template)
                    .map(|spec| spec.substitute(&template, first))
                    .unwrap_or(template)
            }
            _ => template,
        };

        let source = path.parent().unwrap_or_else(|| Path::new("")).join(&filename);
        let destination = footage_root.join(&filename);
        copy_one(&source, &destination).await
    }

    /// Expand a sequence reference and drain its batch through the pool
    #[allow(clippy::too_many_arguments)]
    async fn collect_sequence(
        &self,
        reference: &AssetReference,
        footage_root: &Path,
        first: i64,
        last: i64,
        semaphore: &Arc<Semaphore>,
        cancel: &CancelFlag,
        progress: &dyn ProgressSink,
        percent: u8,
        report: &mut RunReport,
    ) {
        // A reversed range violates the host contract; surface it
        // instead of expanding to zero jobs.
        if first > last {
            warn!(
                "Skipping {}: reversed frame range {}~{}",
                reference.name, first, last
            );
            report.add_skipped();
            return;
        }

        let path = Path::new(&reference.path);
        let template = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let source_dir = path.parent().unwrap_or_else(|| Path::new(""));

        let jobs = match sequence::expand(&template, source_dir, footage_root, first, last) {
            Ok(jobs) => jobs,
            Err(e) => {
                warn!("Skipping {}: {}", reference.name, e);
                report.add_skipped();
                return;
            }
        };

        info!(
            "Copying sequence {} (frames {}~{}, {} files)",
            template,
            first,
            last,
            jobs.len()
        );

        // Safe to race with nothing: one coordinator, created before dispatch.
        if let Some(destination_dir) = jobs.first().and_then(|j| j.destination.parent()) {
            if let Err(e) = tokio::fs::create_dir_all(destination_dir).await {
                warn!(
                    "Cannot create {}: {} (copies will be recorded as failed)",
                    destination_dir.display(),
                    e
                );
            }
        }

        let mut handles = Vec::with_capacity(jobs.len());
        for job in jobs {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            progress.update(percent, &format!("Collecting frame: {}", job.display_name));

            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                // Semaphore lives as long as the engine; close never happens.
                Err(_) => break,
            };

            handles.push(tokio::spawn(run_job(job, permit)));
        }

        // Let already-dispatched jobs drain even after cancellation.
        for handle in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => Outcome::Failed(format!("copy task panicked: {e}")),
            };
            report.record(&outcome);
        }
    }

    /// Rewrite each collected reference to its new relative location.
    ///
    /// Multi-frame non-video references point into their per-sequence
    /// subdirectory and keep their padding token; everything else
    /// points at `footage/<basename>`.
    fn rewrite_references(&self, source: &mut dyn AssetSource, references: &[AssetReference]) {
        for (index, reference) in references.iter().enumerate() {
            if let Some(new_path) = self.rewritten_relative_path(reference) {
                info!("Reference {} rewritten to: {}", reference.name, new_path);
                source.set_reference_path(index, &new_path);
            }
        }
    }

    /// Relative path a reference will have after collection, or `None`
    /// for references excluded from the run
    pub fn rewritten_relative_path(&self, reference: &AssetReference) -> Option<String> {
        if reference.path.is_empty() || reference.render_only {
            return None;
        }

        let path = Path::new(&reference.path);
        let basename = path.file_name()?.to_string_lossy();

        match self.classify(reference) {
            Classification::Excluded => None,
            Classification::Sequence { .. } => {
                let subdir = path
                    .parent()
                    .and_then(|p| p.file_name())
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string();
                Some(format!("footage/{}/{}", subdir, basename))
            }
            Classification::SingleFile => Some(format!("footage/{}", basename)),
        }
    }
}

async fn run_job(job: CopyJob, _permit: tokio::sync::OwnedSemaphorePermit) -> Outcome {
    let outcome = copy_one(&job.source, &job.destination).await;
    debug!("Frame {}: {:?}", job.display_name, outcome);
    outcome
}

/// Copy one file, isolating every failure as an [`Outcome`].
///
/// This is the failure-isolation point for the whole engine: a missing
/// source records `SourceMissing`, an I/O error records `Failed`, and
/// nothing escapes as an error, so one bad frame never aborts a batch.
pub async fn copy_one(source: &Path, destination: &Path) -> Outcome {
    let source = normalize(source);
    let destination = normalize(destination);

    match tokio::fs::try_exists(&source).await {
        Ok(true) => match tokio::fs::copy(&source, &destination).await {
            Ok(_) => {
                info!("[COPY] {} -> {}", source.display(), destination.display());
                Outcome::Copied
            }
            Err(e) => {
                error!(
                    "[FAILED] {} -> {}: {}",
                    source.display(),
                    destination.display(),
                    e
                );
                Outcome::Failed(e.to_string())
            }
        },
        Ok(false) => {
            error!("[MISSING] Source file does not exist: {}", source.display());
            Outcome::SourceMissing
        }
        Err(e) => {
            error!("[FAILED] Cannot stat {}: {}", source.display(), e);
            Outcome::Failed(e.to_string())
        }
    }
}

/// Lexically normalize a path (drop `.`, resolve `..` where possible)
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
