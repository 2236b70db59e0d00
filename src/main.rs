//! # Collect Footage - Main Entry Point
//!
//! CLI around the collection engine.
//!
//! ## Execution flow:
//! 1. Parse CLI arguments (manifest, output root, workers, verbose)
//! 2. Configure logging (INFO, or DEBUG with --verbose)
//! 3. Load the engine configuration and the project manifest
//! 4. Wire Ctrl-C to the run's cancellation flag
//! 5. Collect, then save the rewritten manifest into the output root
//!
//! ## Example:
//! ```bash
//! collect-footage project.json /deliver/show_042 --workers 8 --verbose
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use footage_collector::{
    CancelFlag, CollectionEngine, Config, ProgressManager, ProjectManifest,
};

#[derive(Parser)]
#[command(name = "collect-footage")]
#[command(about = "Collect a project's media references into a self-contained footage directory")]
struct Args {
    /// Project manifest listing the asset references (JSON)
    manifest: PathBuf,

    /// Output root; footage lands in <output>/footage/
    output: PathBuf,

    /// Number of parallel copy workers for sequences
    #[arg(short, long)]
    workers: Option<usize>,

    /// Engine configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Validate arguments
    if !args.manifest.exists() {
        return Err(anyhow::anyhow!(
            "Manifest does not exist: {}",
            args.manifest.display()
        ));
    }

    let mut config = match args.config {
        Some(ref path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    if let Some(workers) = args.workers {
        config.workers = workers;
    }

    let mut manifest = ProjectManifest::load(&args.manifest).await?;
    let engine = CollectionEngine::new(config)?;

    // Ctrl-C requests cooperative cancellation; in-flight copies drain.
    let cancel = CancelFlag::new();
    let cancel_handle = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Cancellation requested, finishing in-flight copies");
            cancel_handle.cancel();
        }
    });

    let progress = ProgressManager::new();
    let report = engine
        .collect(&mut manifest, &args.output, &cancel, &progress)
        .await?;
    progress.finish(&report.format_summary());

    if report.cancelled {
        info!("Collect cancelled.");
        return Ok(());
    }

    // Save the rewritten manifest next to the collected footage.
    let manifest_name = args
        .manifest
        .file_name()
        .unwrap_or_else(|| "project.json".as_ref());
    manifest.save(&args.output.join(manifest_name)).await?;

    if report.has_failures() {
        warn!(
            "Collect finished with problems: {} missing, {} failed, {} skipped",
            report.source_missing, report.failed, report.skipped
        );
    } else {
        info!("Collect done!");
    }

    Ok(())
}
