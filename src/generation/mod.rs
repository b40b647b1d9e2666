//! Generation domain module - template discovery and include expansion
//!
//! This module turns the raw `*.template.md` sources into expanded text. It
//! knows nothing about where the results end up; writing is left to the
//! output services in the infrastructure layer.

pub mod discovery;
pub mod include;
pub mod types;

pub use discovery::*;
pub use include::*;
pub use types::*;
