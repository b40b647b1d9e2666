//! Template discovery in the command source directory

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::core::error::{BuildError, Result};

/// A template found in the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// File name, e.g. `decide.template.md`
    pub name: String,
    /// Full path of the template
    pub source_path: PathBuf,
    /// Name of the expanded file, e.g. `decide.md`
    pub output_name: String,
}

/// Derive the output file name by swapping `template_suffix` for `output_suffix`.
///
/// Returns `None` when `template_name` does not end with `template_suffix`.
pub fn output_name(
    template_name: &str,
    template_suffix: &str,
    output_suffix: &str,
) -> Option<String> {
    template_name
        .strip_suffix(template_suffix)
        .map(|stem| format!("{stem}{output_suffix}"))
}

/// List the templates in `source_dir`, sorted by file name.
///
/// Entries whose names do not end with `template_suffix` are ignored.
pub async fn discover_templates(
    source_dir: &Path,
    template_suffix: &str,
    output_suffix: &str,
) -> Result<Vec<TemplateFile>> {
    let mut entries = fs::read_dir(source_dir)
        .await
        .map_err(|e| BuildError::directory(source_dir, e))?;

    let mut templates = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| BuildError::directory(source_dir, e))?
    {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!(entry = ?file_name, "Skipping entry with non UTF-8 name");
            continue;
        };

        let Some(output) = output_name(name, template_suffix, output_suffix) else {
            debug!(entry = %name, "Ignoring non-template entry");
            continue;
        };

        templates.push(TemplateFile {
            name: name.to_string(),
            source_path: entry.path(),
            output_name: output,
        });
    }

    templates.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(
        dir = %source_dir.display(),
        count = templates.len(),
        "Discovered templates"
    );
    Ok(templates)
}
