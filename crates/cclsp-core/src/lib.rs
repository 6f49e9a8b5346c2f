//! Core analysis for cclsp.
//!
//! This crate holds everything that does not need a protocol connection:
//!
//! - **Scanner**: the ordered lexical rule table and the lazy line scanner
//! - **Completion**: the static completion catalog
//! - **Error Types**: the shared error enum
//!
//! The `cclsp` crate maps these values onto LSP types.
//!
//! # Examples
//!
//! ```
//! use cclsp_core::{Severity, scan};
//!
//! let severities: Vec<Severity> = scan("Coding Challenges\nWatching a Video")
//!     .map(|m| m.severity)
//!     .collect();
//!
//! assert_eq!(severities, vec![Severity::Hint, Severity::Information]);
//! ```

pub mod completion;
pub mod error;
pub mod scanner;

// Re-export commonly used types
pub use completion::{CandidateKind, CompletionCandidate, candidates};
pub use error::{CclspError, Result};
pub use scanner::{DEFAULT_RULES, Match, PatternScanner, Rule, Severity, scan};
