//! Scanner configuration.

use charcode::LOWBAR;

/// Default number of characters shown in a [`ScanError`](crate::ScanError)
/// preview.
pub const DEFAULT_PREVIEW_LEN: usize = 64;

/// Configuration for a [`TextScanner`](crate::TextScanner).
///
/// ```
/// use charcode_scan::{ScanOptions, TextScanner};
///
/// let options = ScanOptions {
///     word_joiner: '$',
///     ..ScanOptions::default()
/// };
/// let mut scanner = TextScanner::with_options("$el = 1", options);
/// assert_eq!(scanner.expect_ident().ok().as_deref(), Some("$el"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Maximum number of characters of surrounding text captured into a
    /// scan error.
    ///
    /// # Default
    ///
    /// `64`
    pub preview_len: usize,

    /// Non-alphabetic character that may start an identifier in
    /// [`TextScanner::expect_ident`](crate::TextScanner::expect_ident).
    /// Characters after the first still have to be identifier characters.
    ///
    /// # Default
    ///
    /// `'_'`
    pub word_joiner: char,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            preview_len: DEFAULT_PREVIEW_LEN,
            word_joiner: LOWBAR,
        }
    }
}
