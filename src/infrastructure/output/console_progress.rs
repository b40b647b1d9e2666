//! Plain-text progress lines on stdout

use crate::application::{BuildReport, ProgressReporter};
use crate::generation::TemplateFile;

/// Progress reporter printing one line per step to stdout
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for ConsoleProgress {
    fn build_started(&self) {
        println!("Building commands...");
    }

    fn template_started(&self, template: &TemplateFile) {
        println!("  {} -> {}", template.name, template.output_name);
    }

    fn build_finished(&self, _report: &BuildReport) {
        println!("Build complete!");
    }
}
