//! Scan errors.
//!
//! There is a single failure kind. It carries WHERE (cursor offset), WHAT
//! (message) and a bounded preview of the text at that point for
//! diagnostics. Callers decide whether to abort or translate it into a
//! higher-level diagnostic; nothing inside the scanner recovers from it.

/// A failed expectation, an over-long fixed-size move, or an explicit
/// [`TextScanner::raise`](crate::TextScanner::raise).
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{message}. {pos}, {preview}")]
pub struct ScanError {
    /// What went wrong.
    pub message: String,
    /// Cursor offset (in characters) when the error was raised.
    pub pos: usize,
    /// Up to `ScanOptions::preview_len` characters of surrounding text.
    pub preview: String,
}

impl ScanError {
    pub fn new(message: impl Into<String>, pos: usize, preview: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            pos,
            preview: preview.into(),
        }
    }
}

/// Result alias used throughout the scanner.
pub type Result<T, E = ScanError> = std::result::Result<T, E>;
