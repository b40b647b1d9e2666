//! Error handling for the plugin build.
//!
//! This module defines the error type `BuildError` returned by every stage of
//! the build, along with a convenient `Result` type alias. Each variant keeps
//! the path of the file or directory that caused it so the binary can report
//! exactly which input broke the run.
//!
//! # Examples
//!
//! ```
//! use plugin_build::core::error::{BuildError, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for build operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Main error type for build operations
#[derive(Debug, Error)]
pub enum BuildError {
    /// A referenced include file could not be read
    #[error("Failed to include: {}", path.display())]
    IncludeResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source directory could not be listed or the output directory created
    #[error("Failed to access directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovered template could not be read
    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    /// Create a new include resolution error
    pub fn include<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::IncludeResolution {
            path: path.into(),
            source,
        }
    }

    /// Create a new directory access error
    pub fn directory<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a new template read error
    pub fn template_read<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::TemplateRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new write error
    pub fn write<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
