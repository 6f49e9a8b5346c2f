pub mod config;
pub mod document;
pub mod handlers;
pub mod server;
mod test_utils;

// Re-export commonly used types
pub use cclsp_core::{CclspError, Result};
pub use server::Backend;

/// Crate version, reported in `initialize` and `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
