//! Build orchestration - discovers templates, expands them and writes the results

use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

use crate::application::{OutputService, ProgressReporter};
use crate::core::{BuildError, BuildOptions, Result};
use crate::generation::{Artifact, TemplateFile, discover_templates, expand_includes};
use crate::infrastructure::{ConsoleProgress, FileSystemOutputService};

/// One template turned into an output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCommand {
    pub template: String,
    pub output_path: PathBuf,
}

/// Summary of a successful build, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub commands: Vec<BuiltCommand>,
}

impl BuildReport {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Orchestrates a full build of the command templates
pub struct BuildOrchestrator {
    options: BuildOptions,
    output: Arc<dyn OutputService>,
    progress: Arc<dyn ProgressReporter>,
}

impl BuildOrchestrator {
    /// Create a new build orchestrator
    pub fn new(
        options: BuildOptions,
        output: Arc<dyn OutputService>,
        progress: Arc<dyn ProgressReporter>,
    ) -> Self {
        Self {
            options,
            output,
            progress,
        }
    }

    /// Execute the build.
    ///
    /// Templates are processed one after another; the first error stops the
    /// run. Outputs written before the failure are left in place.
    pub async fn run(&self) -> Result<BuildReport> {
        self.progress.build_started();
        info!(
            root = %self.options.plugin_root.display(),
            "Building commands"
        );

        // 1. Output directory
        self.output.ensure_directory(&self.options.output_dir).await?;

        // 2. Templates, sorted by name
        let templates = discover_templates(
            &self.options.source_dir,
            &self.options.template_suffix,
            &self.options.output_suffix,
        )
        .await?;

        // 3. Expand and write each one
        let mut report = BuildReport::default();
        for template in &templates {
            let built = self.build_template(template).await?;
            report.commands.push(built);
        }

        // 4. Done
        info!(count = report.len(), "Build complete");
        self.progress.build_finished(&report);
        Ok(report)
    }

    async fn build_template(&self, template: &TemplateFile) -> Result<BuiltCommand> {
        self.progress.template_started(template);
        info!(
            template = %template.name,
            output = %template.output_name,
            "Expanding template"
        );

        let content = fs::read_to_string(&template.source_path)
            .await
            .map_err(|e| BuildError::template_read(&template.source_path, e))?;

        let expanded = expand_includes(&content, &self.options.plugin_root).await?;

        let output_path = self.options.output_dir.join(&template.output_name);
        self.output
            .write_artifact(&Artifact::new(&output_path, expanded))
            .await?;

        debug!(path = %output_path.display(), "Template written");
        Ok(BuiltCommand {
            template: template.name.clone(),
            output_path,
        })
    }
}

/// Build with the filesystem output service and console progress.
pub async fn build(options: BuildOptions) -> Result<BuildReport> {
    BuildOrchestrator::new(
        options,
        Arc::new(FileSystemOutputService::new()),
        Arc::new(ConsoleProgress::new()),
    )
    .run()
    .await
}
