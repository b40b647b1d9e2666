//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::application::OutputService;
use crate::core::{BuildError, Result};
use crate::generation::Artifact;

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifact(&self, artifact: &Artifact) -> Result<()> {
        // Truncates any previous output
        let mut file = fs::File::create(&artifact.path)
            .await
            .map_err(|e| BuildError::write(&artifact.path, e))?;

        file.write_all(artifact.content.as_bytes())
            .await
            .map_err(|e| BuildError::write(&artifact.path, e))?;

        file.flush()
            .await
            .map_err(|e| BuildError::write(&artifact.path, e))?;

        debug!(
            path = %artifact.path.display(),
            bytes = artifact.content.len(),
            "Wrote artifact"
        );
        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| BuildError::directory(path, e))
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
