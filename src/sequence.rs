//! # Sequence Expander Module
//!
//! Turns a filename template plus an inclusive frame range into the
//! concrete list of per-frame copy jobs.
//!
//! ## Algorithm:
//! 1. Parse the padding token out of the template's base filename;
//!    no token means the asset was misclassified as a sequence and the
//!    expansion fails with `CollectError::Classification`
//! 2. For each frame in `[first, last]`, render the zero-padded frame
//!    number into the template
//! 3. Pair `source_dir/<rendered>` with
//!    `output_root/<basename(source_dir)>/<rendered>`
//!
//! Jobs come out in increasing frame order so logs and tests are
//! deterministic. Each expansion is generated eagerly and consumed
//! once; the list is bounded by `last - first + 1`.

use crate::error::CollectError;
use crate::padding::PaddingSpec;
use std::path::{Path, PathBuf};

/// One file copy, created per frame or per single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Rendered filename, used for progress messages and logs
    pub display_name: String,
}

/// Expand a sequence template into one `CopyJob` per frame.
///
/// `template` is the base filename carrying the padding token;
/// `output_root` is the footage directory the run collects into. The
/// destination folder (`output_root/<basename(source_dir)>`) is not
/// created here; the engine creates it before dispatching the batch.
pub fn expand(
    template: &str,
    source_dir: &Path,
    output_root: &Path,
    first: i64,
    last: i64,
) -> Result<Vec<CopyJob>, CollectError> {
    let spec = PaddingSpec::parse(template)
        .ok_or_else(|| CollectError::Classification(template.to_string()))?;

    let subdir = source_dir.file_name().unwrap_or_default();
    let destination_dir = output_root.join(subdir);

    let mut jobs = Vec::with_capacity((last - first + 1).max(0) as usize);
    for frame in first..=last {
        let rendered = spec.substitute(template, frame);
        jobs.push(CopyJob {
            source: source_dir.join(&rendered),
            destination: destination_dir.join(&rendered),
            display_name: rendered,
        });
    }

    Ok(jobs)
}
