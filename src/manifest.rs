//! # Project Manifest Module
//!
//! A JSON-backed [`AssetSource`] for the CLI: one entry per
//! file-producing node in the project, with its path template, optional
//! frame range, and the render-only flag.
//!
//! After a successful run the rewritten manifest is saved into the
//! output root next to the collected footage, so the whole directory is
//! self-contained.
//!
//! ## Example manifest:
//! ```json
//! {
//!   "entries": [
//!     { "name": "Read1", "path": "/proj/renders/shot010/shot010.%04d.exr",
//!       "first": 1001, "last": 1048 },
//!     { "name": "Clip1", "path": "/proj/media/ref.mov" },
//!     { "name": "Write1", "path": "/proj/out/comp.%04d.exr",
//!       "first": 1001, "last": 1048, "render_only": true }
//!   ]
//! }
//! ```

use crate::asset::{AssetReference, AssetSource};
use crate::error::CollectError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One file-producing node as stored in the project manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<i64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub render_only: bool,
}

/// JSON project manifest acting as the engine's host
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectManifest {
    pub entries: Vec<ManifestEntry>,
}

impl ProjectManifest {
    /// Load a manifest from a JSON file
    pub async fn load(path: &Path) -> Result<Self, CollectError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CollectError::Manifest(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            CollectError::Manifest(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    /// Save the manifest as pretty-printed JSON
    pub async fn save(&self, path: &Path) -> Result<(), CollectError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CollectError::Manifest(e.to_string()))?;
        tokio::fs::write(path, content).await.map_err(|e| {
            CollectError::Manifest(format!("cannot write {}: {}", path.display(), e))
        })
    }
}

impl AssetSource for ProjectManifest {
    fn asset_references(&self) -> Vec<AssetReference> {
        self.entries
            .iter()
            .map(|entry| AssetReference {
                name: entry.name.clone(),
                path: entry.path.clone(),
                frame_range: match (entry.first, entry.last) {
                    (Some(first), Some(last)) => Some((first, last)),
                    (Some(first), None) => Some((first, first)),
                    _ => None,
                },
                render_only: entry.render_only,
            })
            .collect()
    }

    fn set_reference_path(&mut self, index: usize, new_path: &str) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.path = new_path.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manifest() -> ProjectManifest {
        ProjectManifest {
            entries: vec![
                ManifestEntry {
                    name: "Read1".to_string(),
                    path: "/proj/renders/shot010/shot010.%04d.exr".to_string(),
                    first: Some(1001),
                    last: Some(1048),
                    render_only: false,
                },
                ManifestEntry {
                    name: "Clip1".to_string(),
                    path: "/proj/media/ref.mov".to_string(),
                    first: None,
                    last: None,
                    render_only: false,
                },
            ],
        }
    }

    #[test]
    fn test_asset_references_mapping() {
        let refs = manifest().asset_references();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].frame_range, Some((1001, 1048)));
        assert_eq!(refs[1].frame_range, None);
        assert!(!refs[0].render_only);
    }

    #[test]
    fn test_first_without_last_is_degenerate_range() {
        let mut m = manifest();
        m.entries[0].last = None;
        let refs = m.asset_references();
        assert_eq!(refs[0].frame_range, Some((1001, 1001)));
    }

    #[test]
    fn test_set_reference_path() {
        let mut m = manifest();
        m.set_reference_path(1, "footage/ref.mov");
        assert_eq!(m.entries[1].path, "footage/ref.mov");
        // Out-of-range writes are ignored.
        m.set_reference_path(99, "footage/ghost.mov");
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.json");

        let original = manifest();
        original.save(&path).await.unwrap();
        let loaded = ProjectManifest::load(&path).await.unwrap();

        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let err = ProjectManifest::load(&path).await.unwrap_err();
        assert!(matches!(err, CollectError::Manifest(_)));
    }
}
