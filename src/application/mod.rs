//! Application layer - runs the build use case over the domain and infrastructure

pub mod build;
pub mod traits;

pub use build::*;
pub use traits::*;
