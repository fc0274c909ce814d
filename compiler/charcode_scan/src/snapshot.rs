//! Position snapshots for speculative matching.
//!
//! A snapshot captures only the cursor offset. Restoring it moves the cursor
//! and nothing else: the last-match record and the context stack are left
//! as they are. Snapshots are `Copy`; take as many as needed.
//!
//! ```
//! use charcode_scan::TextScanner;
//!
//! let mut scanner = TextScanner::new("let x");
//! let snapshot = scanner.save_position();
//! if scanner.expect_string("lot").is_err() {
//!     scanner.restore(snapshot);
//! }
//! assert_eq!(scanner.pos(), 0);
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

/// Process-unique identity of a scanner instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScannerId(u32);

impl ScannerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A captured cursor offset, restorable with
/// [`TextScanner::restore`](crate::TextScanner::restore).
///
/// Only meaningful against the scanner that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanPos {
    pub(crate) scanner: ScannerId,
    pub(crate) offset: usize,
}

impl ScanPos {
    #[inline]
    pub(crate) fn new(scanner: ScannerId, offset: usize) -> Self {
        Self { scanner, offset }
    }

    /// The captured cursor offset.
    #[inline]
    pub fn offset(self) -> usize {
        self.offset
    }

    /// The scanner this snapshot belongs to.
    #[inline]
    pub fn scanner(self) -> ScannerId {
        self.scanner
    }
}
