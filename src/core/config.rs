//! Configuration for a plugin build.
//!
//! This module provides the [`BuildOptions`] struct which tells the builder
//! where to look for templates and where to put the expanded commands:
//!
//! - Plugin root (base directory for `{{include:...}}` paths)
//! - Source directory holding `*.template.md` files
//! - Output directory for the generated `*.md` files
//! - Template and output file suffixes
//!
//! # Example
//!
//! ```rust
//! use plugin_build::core::config::BuildOptions;
//!
//! let options = BuildOptions::for_plugin_root("plugins/decision-support");
//! assert!(options.source_dir.ends_with("src/commands"));
//! assert!(options.output_dir.ends_with("commands"));
//! ```

use std::path::{Path, PathBuf};

/// Directory, relative to the plugin root, holding command templates
pub const SOURCE_SUBDIR: &str = "src/commands";

/// Directory, relative to the plugin root, receiving expanded commands
pub const OUTPUT_SUBDIR: &str = "commands";

/// Suffix identifying template files
pub const TEMPLATE_SUFFIX: &str = ".template.md";

/// Suffix given to expanded output files
pub const OUTPUT_SUFFIX: &str = ".md";

/// Locations and naming rules for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Base directory include paths are resolved against
    pub plugin_root: PathBuf,

    /// Directory scanned for templates
    pub source_dir: PathBuf,

    /// Directory the expanded files are written to
    pub output_dir: PathBuf,

    /// Suffix a file name must end with to be treated as a template
    pub template_suffix: String,

    /// Suffix replacing `template_suffix` in output names
    pub output_suffix: String,
}

impl BuildOptions {
    /// Standard layout for a plugin rooted at `plugin_root`.
    pub fn for_plugin_root<P: AsRef<Path>>(plugin_root: P) -> Self {
        let plugin_root = plugin_root.as_ref().to_path_buf();
        Self {
            source_dir: plugin_root.join(SOURCE_SUBDIR),
            output_dir: plugin_root.join(OUTPUT_SUBDIR),
            plugin_root,
            template_suffix: TEMPLATE_SUFFIX.to_string(),
            output_suffix: OUTPUT_SUFFIX.to_string(),
        }
    }

    /// Override the source directory
    pub fn with_source_dir<P: Into<PathBuf>>(mut self, source_dir: P) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    /// Override the output directory
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
