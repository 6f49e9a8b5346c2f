use thiserror::Error;

/// Core error types for cclsp.
///
/// None of these errors are fatal to the server. Handlers degrade on every
/// variant (empty text, skipped diagnostic) instead of failing a notification.
///
/// # Examples
///
/// ```
/// use cclsp_core::error::{CclspError, Result};
///
/// fn stored_text(found: Option<&str>, uri: &str) -> Result<String> {
///     found
///         .map(str::to_owned)
///         .ok_or_else(|| CclspError::DocumentNotFound(uri.into()))
/// }
///
/// assert!(stored_text(None, "file:///a.txt").is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CclspError {
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("position out of range: line {line}, column {column}")]
    PositionOverflow { line: usize, column: usize },
}

/// Convenience type alias for `Result<T, CclspError>`.
pub type Result<T> = std::result::Result<T, CclspError>;
