//! # Configuration Management Module
//!
//! Holds the tunables of the collection engine.
//!
//! ## Parameters:
//! - `workers`: width of the worker pool used for sequence copies
//!   (default: 4); set to 1 for deterministic ordering in tests
//! - `video_extensions`: extensions treated as video containers; a
//!   container encodes its own frames, so such references are always
//!   collected as a single file regardless of frame-range attributes
//!
//! ## Validation:
//! - `workers` must be > 0
//! - `video_extensions` must not be empty
//!
//! Supports JSON load/save so a pipeline can pin its own container list.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a collection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of parallel copy workers for sequences
    pub workers: usize,
    /// File extensions (lowercase, no dot) treated as video containers
    pub video_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: 4,
            video_extensions: [
                "mov", "avi", "mp4", "mpeg", "mpg", "r3d", "mxf", "mkv", "flv", "webm",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(anyhow::anyhow!("Number of workers must be greater than 0"));
        }

        if self.video_extensions.is_empty() {
            return Err(anyhow::anyhow!("Video extension list must not be empty"));
        }

        Ok(())
    }

    /// Load configuration from file, falling back to defaults if absent
    pub async fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.workers = 0;
        assert!(config.validate().is_err());

        config.workers = 4;
        config.video_extensions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.workers, 4);
        assert!(config.video_extensions.contains(&"mov".to_string()));
        assert!(config.video_extensions.contains(&"r3d".to_string()));
        assert!(!config.video_extensions.contains(&"exr".to_string()));
    }

    #[tokio::test]
    async fn test_config_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let original_config = Config {
            workers: 8,
            video_extensions: vec!["mov".to_string(), "mp4".to_string()],
        };

        original_config.save_to_file(&config_path).await.unwrap();
        let loaded_config = Config::from_file(&config_path).await.unwrap();

        assert_eq!(loaded_config.workers, 8);
        assert_eq!(loaded_config.video_extensions, vec!["mov", "mp4"]);
    }

    #[tokio::test]
    async fn test_config_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::from_file(&temp_dir.path().join("nope.json"))
            .await
            .unwrap();
        assert_eq!(config.workers, 4);
    }
}
