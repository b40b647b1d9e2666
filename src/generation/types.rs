//! Types shared by the generation and output layers

use std::path::PathBuf;

/// An expanded file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, content: S) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
