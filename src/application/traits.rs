//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::core::Result;
use crate::generation::Artifact;

/// Service for writing expanded artifacts to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write a single artifact, replacing any existing file
    async fn write_artifact(&self, artifact: &Artifact) -> Result<()>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<()>;
}

/// Receives user-facing progress as the build advances
pub trait ProgressReporter: Send + Sync {
    /// Called once before any template is processed
    fn build_started(&self);

    /// Called when a template begins expansion
    fn template_started(&self, template: &crate::generation::TemplateFile);

    /// Called after every template has been written
    fn build_finished(&self, report: &crate::application::BuildReport);
}
