//! # Asset Reference Module
//!
//! The seam between the engine and the host project.
//!
//! The host owns the project graph; the engine only needs a flat,
//! read-only view of its file-producing references plus a write-back
//! hook for the rewritten paths. `AssetSource` is that capability:
//! populate one `AssetReference` per node at the start of a run, let
//! the engine classify and copy, then accept the new relative paths.

use std::path::Path;

/// Extension-derived class of an asset reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionClass {
    /// Video containers encode their own frames; always a single file
    Video,
    Generic,
}

/// One file-producing unit in the host project, read-only to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    /// Host-side node name, used for progress and log messages
    pub name: String,
    /// Filename template; may contain a padding token such as `%04d`
    pub path: String,
    /// Inclusive frame range, when the host exposes one
    pub frame_range: Option<(i64, i64)>,
    /// Render-output-only nodes are excluded from collection
    pub render_only: bool,
}

impl AssetReference {
    /// Lowercased file extension of the path template, if any
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.path)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Classify the reference against a video-container extension list
    pub fn extension_class(&self, video_extensions: &[String]) -> ExtensionClass {
        match self.extension() {
            Some(ext) if video_extensions.iter().any(|v| v == &ext) => ExtensionClass::Video,
            _ => ExtensionClass::Generic,
        }
    }
}

/// Host capability the engine collects from and writes back to
pub trait AssetSource {
    /// Snapshot of all file-producing references, in host order
    fn asset_references(&self) -> Vec<AssetReference>;

    /// Write the rewritten path for the reference at `index` (the
    /// position in the `asset_references()` snapshot)
    fn set_reference_path(&mut self, index: usize, new_path: &str);
}
