//! Cursor over a fully materialized character buffer.
//!
//! The scanner consumes runs of characters under the control of predicates.
//! Every movement returns the run it consumed. Buffered movements also
//! record that run as the scanner's *last match*, replacing whatever was
//! recorded before; unbuffered movements leave the record alone.
//!
//! # Character Units
//!
//! The buffer holds Unicode scalar values (`char`), so every offset is a
//! character index, not a byte index. A character outside the Basic
//! Multilingual Plane counts as one position and can never be split by a
//! movement.
//!
//! # Advance Observer
//!
//! An observer passed at construction sees every character consumed by a
//! predicate-driven movement (`move_accept`, `move_until`,
//! `move_accept_terminate`, and everything built on them). Fixed-size moves,
//! [`back`](TextScanner::back) and [`restore`](TextScanner::restore) do not
//! notify it.

mod expect;

use std::fmt;

use charcode::{CharPredicate, CharSet};

use crate::context::ContextStack;
use crate::error::{Result, ScanError};
use crate::options::ScanOptions;
use crate::snapshot::{ScanPos, ScannerId};

/// Observer notified once per consumed character.
type AdvanceObserver<'a> = Box<dyn FnMut(char) + 'a>;

/// Which predicate [`TextScanner::move_accept_terminate`] consults first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminateOrder {
    /// Test the terminator before the acceptor. The terminating character
    /// is left unconsumed.
    TerminatorFirst,
    /// Test the acceptor first, then test the terminator against the
    /// character just consumed. A terminating character reached through
    /// acceptance is included in the run.
    AcceptorFirst,
}

/// A movement request for [`TextScanner::move_next`] and
/// [`TextScanner::skip`].
///
/// Exactly one strategy applies, chosen by priority: `acceptor`, then
/// `terminator`, then a fixed-size move of `size` (default 1).
///
/// ```
/// use charcode::is_digit;
/// use charcode_scan::{MoveNext, TextScanner};
///
/// let mut scanner = TextScanner::new("42px");
/// let digits = scanner.move_next(MoveNext::accept(&is_digit)).ok();
/// assert_eq!(digits.as_deref(), Some("42"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct MoveNext<'p> {
    pub size: Option<usize>,
    pub acceptor: Option<&'p dyn CharPredicate>,
    pub terminator: Option<&'p dyn CharPredicate>,
}

impl<'p> MoveNext<'p> {
    /// Fixed-size move of `n` characters.
    pub fn size(n: usize) -> Self {
        Self {
            size: Some(n),
            ..Self::default()
        }
    }

    /// Accept-while move.
    pub fn accept(acceptor: &'p dyn CharPredicate) -> Self {
        Self {
            acceptor: Some(acceptor),
            ..Self::default()
        }
    }

    /// Until-terminator move.
    pub fn until(terminator: &'p dyn CharPredicate) -> Self {
        Self {
            terminator: Some(terminator),
            ..Self::default()
        }
    }
}

impl fmt::Debug for MoveNext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveNext")
            .field("size", &self.size)
            .field("acceptor", &self.acceptor.is_some())
            .field("terminator", &self.terminator.is_some())
            .finish()
    }
}

/// Single-pass, backtrackable character scanner.
///
/// Created once per source text and dropped after one scanning pass. Not
/// shareable across threads while scanning: all state is mutated in place.
pub struct TextScanner<'a> {
    id: ScannerId,
    /// Source text as characters. Never mutated after construction.
    chars: Vec<char>,
    /// Cursor. Invariant: `pos <= chars.len()`.
    pos: usize,
    /// Run recorded by the most recent buffered movement.
    last_match: String,
    contexts: ContextStack,
    on_advance: Option<AdvanceObserver<'a>>,
    options: ScanOptions,
}

impl<'a> TextScanner<'a> {
    /// Create a scanner at offset 0 with default options and no observer.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, ScanOptions::default())
    }

    pub fn with_options(text: &str, options: ScanOptions) -> Self {
        Self {
            id: ScannerId::next(),
            chars: text.chars().collect(),
            pos: 0,
            last_match: String::new(),
            contexts: ContextStack::new(),
            on_advance: None,
            options,
        }
    }

    /// Create a scanner whose `observer` is notified of every character
    /// consumed by a predicate-driven movement.
    ///
    /// ```
    /// use std::cell::Cell;
    /// use charcode_scan::{ScanOptions, TextScanner};
    ///
    /// let lines = Cell::new(1);
    /// let mut scanner = TextScanner::with_observer("a\nb\nc", ScanOptions::default(), |ch| {
    ///     if ch == '\n' {
    ///         lines.set(lines.get() + 1);
    ///     }
    /// });
    /// scanner.move_until(|ch: char| ch == 'c', true);
    /// assert_eq!(lines.get(), 3);
    /// ```
    pub fn with_observer(
        text: &str,
        options: ScanOptions,
        observer: impl FnMut(char) + 'a,
    ) -> Self {
        let mut scanner = Self::with_options(text, options);
        scanner.on_advance = Some(Box::new(observer));
        scanner
    }

    // === Cursor queries ===

    /// Current cursor offset, in characters.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total number of characters in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the buffer holds no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    #[inline]
    pub fn not_end(&self) -> bool {
        self.pos < self.chars.len()
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.pos == 0
    }

    /// Character at the cursor, or `None` at end.
    #[inline]
    pub fn now_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Character just before the cursor, or `None` at start.
    #[inline]
    pub fn pre_char(&self) -> Option<char> {
        self.pos.checked_sub(1).map(|i| self.chars[i])
    }

    /// Returns `true` if not at end and the current character is in `set`.
    /// Does not consume.
    #[inline]
    pub fn now_is_any(&self, set: &[char]) -> bool {
        self.now_char().is_some_and(|ch| set.contains(&ch))
    }

    /// Unconsumed text from the cursor to the end.
    pub fn rest(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }

    /// Run recorded by the most recent buffered movement.
    ///
    /// Only meaningful immediately after a buffered call; unbuffered calls
    /// leave it untouched.
    #[inline]
    pub fn last_match(&self) -> &str {
        &self.last_match
    }

    /// Emit the last match as a debug event.
    pub fn log_last_match(&self) {
        tracing::debug!(pos = self.pos, last_match = %self.last_match, "last match");
    }

    #[inline]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    // === Contexts ===

    #[inline]
    pub fn contexts(&self) -> &ContextStack {
        &self.contexts
    }

    #[inline]
    pub fn contexts_mut(&mut self) -> &mut ContextStack {
        &mut self.contexts
    }

    // === Movement primitives ===

    /// Consume exactly `n` characters.
    ///
    /// Fails without moving the cursor if fewer than `n` remain.
    pub fn move_size(&mut self, n: usize, buffered: bool) -> Result<String> {
        let remaining = self.chars.len() - self.pos;
        if n > remaining {
            return self.raise(format!("Exceed max length: {n}"));
        }
        let run: String = self.chars[self.pos..self.pos + n].iter().collect();
        self.pos += n;
        self.record(&run, buffered);
        Ok(run)
    }

    /// Consume the longest run of characters satisfying `acceptor`.
    ///
    /// Never fails; the run may be empty.
    pub fn move_accept(&mut self, acceptor: impl CharPredicate, buffered: bool) -> String {
        let mut run = String::new();
        while let Some(ch) = self.now_char() {
            if !acceptor.accept(ch) {
                break;
            }
            run.push(ch);
            self.forward(ch);
        }
        self.record(&run, buffered);
        run
    }

    /// Consume characters up to, not including, the first one satisfying
    /// `terminator`, or to the end if none does.
    pub fn move_until(&mut self, terminator: impl CharPredicate, buffered: bool) -> String {
        let mut run = String::new();
        while let Some(ch) = self.now_char() {
            if terminator.accept(ch) {
                break;
            }
            run.push(ch);
            self.forward(ch);
        }
        self.record(&run, buffered);
        run
    }

    /// Buffered [`move_until`](Self::move_until) stopping at any of `chars`.
    pub fn move_until_any(&mut self, chars: &[char]) -> String {
        debug_assert!(!chars.is_empty(), "move_until_any needs at least one terminator");
        self.move_until(CharSet(chars), true)
    }

    /// Consume a run bounded by both `acceptor` and `terminator`.
    ///
    /// With [`TerminateOrder::TerminatorFirst`] the terminating character is
    /// excluded from the run; with [`TerminateOrder::AcceptorFirst`] it is
    /// included when the acceptor also holds for it.
    pub fn move_accept_terminate(
        &mut self,
        acceptor: impl CharPredicate,
        terminator: impl CharPredicate,
        order: TerminateOrder,
        buffered: bool,
    ) -> String {
        let mut run = String::new();
        while let Some(ch) = self.now_char() {
            if order == TerminateOrder::TerminatorFirst && terminator.accept(ch) {
                break;
            }
            if !acceptor.accept(ch) {
                break;
            }
            run.push(ch);
            self.forward(ch);
            if order == TerminateOrder::AcceptorFirst && terminator.accept(ch) {
                break;
            }
        }
        self.record(&run, buffered);
        run
    }

    /// Buffered movement by the strategy `request` selects.
    pub fn move_next(&mut self, request: MoveNext<'_>) -> Result<String> {
        self.dispatch(request, true)
    }

    /// Unbuffered movement by the strategy `request` selects.
    pub fn skip(&mut self, request: MoveNext<'_>) -> Result<String> {
        self.dispatch(request, false)
    }

    fn dispatch(&mut self, request: MoveNext<'_>, buffered: bool) -> Result<String> {
        if let Some(acceptor) = request.acceptor {
            Ok(self.move_accept(|ch: char| acceptor.accept(ch), buffered))
        } else if let Some(terminator) = request.terminator {
            Ok(self.move_until(|ch: char| terminator.accept(ch), buffered))
        } else {
            self.move_size(request.size.unwrap_or(1), buffered)
        }
    }

    // === Manual cursor control ===

    /// Rewind the cursor by `n`, stopping at 0.
    ///
    /// Leaves the last match alone and does not notify the observer.
    pub fn back(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    /// Capture the cursor offset for a later [`restore`](Self::restore).
    #[inline]
    pub fn save_position(&self) -> ScanPos {
        ScanPos::new(self.id, self.pos)
    }

    /// Move the cursor to `snapshot`, forward or backward.
    ///
    /// Only the cursor moves: the last match and context stack are kept.
    pub fn restore(&mut self, snapshot: ScanPos) {
        debug_assert_eq!(
            snapshot.scanner, self.id,
            "snapshot restored against a different scanner"
        );
        tracing::trace!(from = self.pos, to = snapshot.offset, "restore position");
        self.pos = snapshot.offset.min(self.chars.len());
    }

    // === Errors ===

    /// Build a [`ScanError`] at the current cursor.
    pub fn error(&self, message: impl Into<String>) -> ScanError {
        let err = ScanError::new(message, self.pos, self.left_text());
        tracing::debug!(pos = err.pos, message = %err.message, "scan error");
        err
    }

    /// Fail with `message` at the current cursor. Always returns `Err`.
    pub fn raise<T>(&self, message: impl Into<String>) -> Result<T> {
        Err(self.error(message))
    }

    /// Up to `preview_len` characters starting at the cursor, or the trailing
    /// `preview_len` characters when at end.
    pub fn left_text(&self) -> String {
        let len = self.chars.len();
        let limit = self.options.preview_len;
        let range = if self.pos < len {
            self.pos..len.min(self.pos.saturating_add(limit))
        } else {
            len.saturating_sub(limit)..len
        };
        self.chars[range].iter().collect()
    }

    // === Internals ===

    /// Step over `ch` (the character at the cursor) and notify the observer.
    #[inline]
    fn forward(&mut self, ch: char) {
        self.pos += 1;
        if let Some(observer) = self.on_advance.as_mut() {
            observer(ch);
        }
    }

    #[inline]
    fn record(&mut self, run: &str, buffered: bool) {
        if buffered {
            self.last_match.clear();
            self.last_match.push_str(run);
        }
    }
}

impl fmt::Debug for TextScanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextScanner")
            .field("id", &self.id)
            .field("pos", &self.pos)
            .field("len", &self.chars.len())
            .field("last_match", &self.last_match)
            .field("contexts", &self.contexts)
            .field("observed", &self.on_advance.is_some())
            .field("options", &self.options)
            .finish()
    }
}
