//! LSP protocol handlers.
//!
//! - [`completion`]: the static completion catalog as an LSP completion list
//! - [`diagnostics`]: scanner matches published as LSP diagnostics
//!
//! Handlers never fail a request or notification. Anything that cannot be
//! turned into a protocol value is logged and skipped.

pub mod completion;
pub mod diagnostics;
