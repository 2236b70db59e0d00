//! # Error Types Module
//!
//! Defines the error taxonomy for the collection engine.
//!
//! ## Categories:
//! - `Io`: filesystem errors outside the per-file copy path
//! - `Classification`: a template believed to be a sequence carries no
//!   recognizable padding token (non-retryable, the asset is skipped)
//! - `DestinationUnavailable`: the output root cannot be created - fatal,
//!   aborts the run before any copying starts
//! - `Manifest`: the project manifest cannot be read or parsed
//! - `Validation`: invalid configuration or CLI input
//!
//! ## Propagation policy:
//! Per-file failures (missing source, copy I/O error) are *recorded* as
//! outcomes inside the engine and never surface as `CollectError`; only
//! pre-flight errors abort a run.

use std::path::PathBuf;

/// Custom error types for footage collection
#[derive(thiserror::Error, Debug)]
pub enum CollectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no recognized frame padding in template: {0}")]
    Classification(String),

    #[error("cannot create output root {path}: {source}")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest error: {0}")]
    Manifest(String),

    #[error("validation error: {0}")]
    Validation(String),
}
