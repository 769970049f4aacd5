//! Configuration and documents directory resolution.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level DocSage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsageConfig {
    /// Directory holding per-document text files.
    pub docs_dir: PathBuf,
}

impl DocsageConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let docs_dir = std::env::var("DOCSAGE_DOCS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("documents"));
        Self { docs_dir }
    }

    /// Create configuration with an explicit documents directory.
    pub fn with_docs_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            docs_dir: dir.as_ref().to_path_buf(),
        }
    }
}
