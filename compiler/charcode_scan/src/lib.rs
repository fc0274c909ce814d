//! Backtracking character scanner for hand-written lexers and parsers.
//!
//! [`TextScanner`] is a cursor over an immutable, fully loaded text. It
//! consumes runs of characters driven by [`CharPredicate`]s (acceptors and
//! terminators), checks expectations, snapshots and restores its position
//! for speculative matches, and carries a [`ContextStack`] of named regions.
//! It does no tokenization of its own.
//!
//! ```
//! use charcode_scan::{ScanContext, TextScanner};
//!
//! let mut scanner = TextScanner::new("name = \"value\"");
//! let key = scanner.expect_ident()?;
//! scanner.skip_space_tab();
//! scanner.expect_char('=')?;
//! scanner.skip_space_tab();
//!
//! scanner.contexts_mut().push(ScanContext::new("str"));
//! scanner.expect_char('"')?;
//! let value = scanner.move_until_any(&['"']);
//! scanner.expect_char('"')?;
//! scanner.contexts_mut().pop();
//!
//! assert_eq!((key.as_str(), value.as_str()), ("name", "value"));
//! assert!(scanner.is_end());
//! # Ok::<(), charcode_scan::ScanError>(())
//! ```

mod context;
mod error;
mod options;
mod scanner;
mod snapshot;

pub use charcode::{CharPredicate, CharPredicateExt, CharSet};
pub use context::{ContextStack, ContextValue, ScanContext};
pub use error::{Result, ScanError};
pub use options::{ScanOptions, DEFAULT_PREVIEW_LEN};
pub use scanner::{MoveNext, TerminateOrder, TextScanner};
pub use snapshot::{ScanPos, ScannerId};

#[cfg(feature = "subscriber")]
static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Requires the `subscriber` feature; without it the scanner only emits
/// events and leaves subscriber setup to the embedding binary.
/// Enable with `RUST_LOG=charcode_scan=debug` or `RUST_LOG=charcode_scan=trace`.
#[cfg(feature = "subscriber")]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
