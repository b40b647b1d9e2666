//! Output service implementations

pub mod console_progress;
pub mod filesystem_output;

pub use console_progress::*;
pub use filesystem_output::*;
