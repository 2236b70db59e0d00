//! # Footage Collector Library
//!
//! Collects the external media referenced by a project into a single
//! self-contained `footage/` directory and rewrites each reference to
//! its new relative location.
//!
//! ## Module architecture:
//! - `padding`: frame-padding token parsing (`%04d`, `%d`, `####`)
//! - `sequence`: expansion of a template + frame range into copy jobs
//! - `asset`: the abstract host seam (`AssetReference`, `AssetSource`)
//! - `collector`: the concurrent, cancellable collection engine
//! - `cancel`: cooperative cancellation flag
//! - `progress`: progress sinks (indicatif bar, no-op)
//! - `report`: per-file outcomes and the aggregated run report
//! - `config`: engine tunables (worker count, video container list)
//! - `manifest`: JSON-backed host used by the CLI
//! - `error`: error taxonomy
//!
//! ## Usage:
//! ```no_run
//! use footage_collector::{CancelFlag, CollectionEngine, Config, NullProgress, ProjectManifest};
//! # async fn run() -> anyhow::Result<()> {
//! let mut manifest = ProjectManifest::load("project.json".as_ref()).await?;
//! let engine = CollectionEngine::new(Config::default())?;
//! let report = engine
//!     .collect(&mut manifest, "/deliver/show".as_ref(), &CancelFlag::new(), &NullProgress)
//!     .await?;
//! println!("{}", report.format_summary());
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod cancel;
pub mod collector;
pub mod config;
pub mod error;
pub mod manifest;
pub mod padding;
pub mod progress;
pub mod report;
pub mod sequence;

pub use asset::{AssetReference, AssetSource, ExtensionClass};
pub use cancel::CancelFlag;
pub use collector::{copy_one, CollectionEngine};
pub use config::Config;
pub use error::CollectError;
pub use manifest::{ManifestEntry, ProjectManifest};
pub use padding::PaddingSpec;
pub use progress::{NullProgress, ProgressManager, ProgressSink};
pub use report::{Outcome, RunReport};
pub use sequence::CopyJob;
