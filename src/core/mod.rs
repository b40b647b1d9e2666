//! Core configuration and error types shared by every layer

pub mod config;
pub mod error;

pub use config::BuildOptions;
pub use error::{BuildError, Result};
