//! Expectations and skips.
//!
//! Fail-fast `expect_*` methods return a [`ScanError`](crate::ScanError)
//! when the text does not match. The `try_expect_*` forms run the same
//! matching, and on failure put both the cursor and the last match back
//! where they were.

use std::cmp::Reverse;

use charcode::{is_alpha, is_ident, CharSet, SP_TAB, SP_TAB_CR_LF};

use super::TextScanner;
use crate::error::Result;

impl TextScanner<'_> {
    // === Fail-fast ===

    /// Consume one character if it is in `set`.
    pub fn expect_any_char(&mut self, set: &[char]) -> Result<char> {
        debug_assert!(!set.is_empty(), "expect_any_char needs a non-empty set");
        match self.match_char(|ch| set.contains(&ch)) {
            Some(ch) => Ok(ch),
            None => self.raise(format!("Expect chars: {set:?}")),
        }
    }

    /// Consume `expected`.
    pub fn expect_char(&mut self, expected: char) -> Result<()> {
        match self.match_char(|ch| ch == expected) {
            Some(_) => Ok(()),
            None => self.raise(format!("Expect char: {expected}")),
        }
    }

    /// Consume `s` character by character.
    ///
    /// On failure the matched prefix stays consumed; snapshot first (or use
    /// [`try_expect_string`](Self::try_expect_string)) to undo it.
    pub fn expect_string(&mut self, s: &str) -> Result<()> {
        if self.match_string(s) {
            Ok(())
        } else {
            self.raise(format!("Expect string: {s}"))
        }
    }

    /// Consume an identifier: an alphabetic character or the word joiner,
    /// then any identifier-continuation characters. The joiner only widens
    /// the first character.
    ///
    /// Fails, consuming nothing, if the cursor is not at an identifier start.
    pub fn expect_ident(&mut self) -> Result<String> {
        let joiner = self.options.word_joiner;
        if !self.now_char().is_some_and(|ch| is_alpha(ch) || ch == joiner) {
            self.record("", true);
            return self.raise("Expect identifier");
        }
        Ok(self.move_accept(is_ident, true))
    }

    // === Speculative ===

    /// Consume `expected` if present. Returns `false`, with nothing
    /// consumed, otherwise.
    pub fn try_expect_char(&mut self, expected: char) -> bool {
        self.speculate(|s| s.match_char(|ch| ch == expected).is_some())
    }

    /// Consume `s` if the text continues with it. Returns `false`, with
    /// nothing consumed, otherwise.
    pub fn try_expect_string(&mut self, s: &str) -> bool {
        self.speculate(|scanner| scanner.match_string(s))
    }

    /// Try each candidate, longest first, and consume the first that matches.
    ///
    /// Longest-first keeps `"=="` from being read as `"="` followed by `"="`.
    /// Candidates of equal length are tried in the order given.
    pub fn try_expect_any_string(&mut self, candidates: &[&str]) -> bool {
        debug_assert!(!candidates.is_empty(), "try_expect_any_string needs candidates");
        let mut ordered = candidates.to_vec();
        ordered.sort_by_key(|s| Reverse(s.chars().count()));
        ordered.into_iter().any(|s| self.try_expect_string(s))
    }

    // === Skipping ===

    /// Consume every leading character in `set`, returning them.
    pub fn skip_chars(&mut self, set: &[char]) -> String {
        self.move_accept(CharSet(set), true)
    }

    /// Skip spaces, tabs and line terminators.
    pub fn skip_whites(&mut self) -> String {
        self.skip_chars(SP_TAB_CR_LF)
    }

    /// Same as [`skip_whites`](Self::skip_whites).
    pub fn skip_space_tab_cr_lf(&mut self) -> String {
        self.skip_chars(SP_TAB_CR_LF)
    }

    /// Skip spaces and tabs, stopping at line terminators.
    pub fn skip_space_tab(&mut self) -> String {
        self.skip_chars(SP_TAB)
    }

    // === Matching machinery ===

    /// Consume the current character if `pred` holds for it. Records the
    /// consumed run (one character, or empty).
    fn match_char(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let hit = self.now_char().filter(|&ch| pred(ch));
        match hit {
            Some(ch) => {
                self.forward(ch);
                self.record(ch.encode_utf8(&mut [0; 4]), true);
            }
            None => self.record("", true),
        }
        hit
    }

    /// Consume characters while they agree with `s` position for position.
    /// Records the matched prefix; returns `true` if all of `s` matched.
    fn match_string(&mut self, s: &str) -> bool {
        debug_assert!(!s.is_empty(), "expected string must not be empty");
        let mut matched = String::new();
        for expected in s.chars() {
            match self.now_char() {
                Some(ch) if ch == expected => {
                    matched.push(ch);
                    self.forward(ch);
                }
                _ => break,
            }
        }
        let complete = matched.len() == s.len();
        self.record(&matched, true);
        complete
    }

    /// Run `attempt`; if it reports failure, restore the cursor and the last
    /// match to their state before the attempt.
    fn speculate(&mut self, attempt: impl FnOnce(&mut Self) -> bool) -> bool {
        let snapshot = self.save_position();
        let saved_match = self.last_match.clone();
        if attempt(self) {
            return true;
        }
        tracing::trace!(pos = snapshot.offset(), "speculative match failed, rolling back");
        self.restore(snapshot);
        self.last_match = saved_match;
        false
    }
}
