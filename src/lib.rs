//! plugin-build library
//!
//! Expands `{{include:path}}` placeholders in plugin command templates.
//! Templates live in `src/commands/*.template.md` under a plugin root; each
//! is written to `commands/*.md` with every placeholder replaced by the
//! trimmed contents of the file it names.
//!
//! ```no_run
//! use plugin_build::{BuildOptions, build};
//!
//! # async fn run() -> plugin_build::Result<()> {
//! let report = build(BuildOptions::for_plugin_root(".")).await?;
//! println!("built {} commands", report.len());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;

pub use crate::application::{BuildOrchestrator, BuildReport, BuiltCommand, build};
pub use crate::core::{BuildError, BuildOptions, Result};
pub use crate::generation::{expand_includes, find_placeholders};
