//! Property-based tests for the text scanner.
//!
//! These generate random texts and predicates and check the movement
//! contracts against straightforward reference computations over the
//! remaining text.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use charcode::{is_alpha, is_digit, is_ident};
use charcode_scan::{TerminateOrder, TextScanner};
use proptest::prelude::*;

// -- Strategies --

/// Short texts over a small alphabet so predicates hit and miss often.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab1_ ,=é]{0,24}").expect("valid regex")
}

/// A character drawn from the same alphabet, used as a terminator.
fn char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        Just('a'),
        Just('b'),
        Just('1'),
        Just(','),
        Just('='),
        Just(' '),
        Just('é'),
    ]
}

fn remaining(text: &str, skip: usize) -> Vec<char> {
    text.chars().skip(skip).collect()
}

proptest! {
    #[test]
    fn move_size_within_bounds_returns_next_chars(
        text in text_strategy(),
        start in 0usize..8,
        n in 0usize..32,
    ) {
        let len = text.chars().count();
        let start = start.min(len);
        let mut s = TextScanner::new(&text);
        s.move_size(start, true).unwrap();

        let result = s.move_size(n, true);
        if n <= len - start {
            let expected: String = remaining(&text, start).into_iter().take(n).collect();
            prop_assert_eq!(result.unwrap(), expected.clone());
            prop_assert_eq!(s.pos(), start + n);
            prop_assert_eq!(s.last_match(), expected.as_str());
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(s.pos(), start);
        }
    }

    #[test]
    fn move_accept_returns_longest_satisfying_prefix(text in text_strategy()) {
        let mut s = TextScanner::new(&text);
        let run = s.move_accept(is_ident, true);
        let expected: String = text.chars().take_while(|&c| is_ident(c)).collect();
        prop_assert_eq!(&run, &expected);
        prop_assert_eq!(s.pos(), expected.chars().count());

        // Stopped on a rejecting character, so further calls are empty.
        prop_assert_eq!(s.move_accept(is_ident, true), "");
        prop_assert_eq!(s.move_accept(is_ident, true), "");
        prop_assert_eq!(s.pos(), expected.chars().count());
    }

    #[test]
    fn move_until_returns_prefix_before_terminator(
        text in text_strategy(),
        stop in char_strategy(),
    ) {
        let mut s = TextScanner::new(&text);
        let run = s.move_until(|c: char| c == stop, true);
        let expected: String = text.chars().take_while(|&c| c != stop).collect();
        prop_assert_eq!(&run, &expected);
        if text.contains(stop) {
            prop_assert_eq!(s.now_char(), Some(stop));
        } else {
            prop_assert!(s.is_end());
        }
    }

    #[test]
    fn accept_terminate_orders_differ_only_by_terminator(
        text in text_strategy(),
        stop in char_strategy(),
    ) {
        let acceptor = |c: char| is_alpha(c) || c == stop;
        let terminator = |c: char| c == stop;

        let mut first = TextScanner::new(&text);
        let excluded =
            first.move_accept_terminate(acceptor, terminator, TerminateOrder::TerminatorFirst, true);

        let mut second = TextScanner::new(&text);
        let included =
            second.move_accept_terminate(acceptor, terminator, TerminateOrder::AcceptorFirst, true);

        prop_assert!(!excluded.contains(stop));
        if first.now_char() == Some(stop) {
            prop_assert_eq!(included, format!("{excluded}{stop}"));
            prop_assert_eq!(second.pos(), first.pos() + 1);
        } else {
            prop_assert_eq!(included, excluded);
            prop_assert_eq!(second.pos(), first.pos());
        }
    }

    #[test]
    fn try_expect_string_failure_leaves_cursor(
        text in text_strategy(),
        start in 0usize..8,
        needle in prop::string::string_regex("[ab1]{1,4}").expect("valid regex"),
    ) {
        let start = start.min(text.chars().count());
        let mut s = TextScanner::new(&text);
        s.move_size(start, true).unwrap();
        let before_match = s.last_match().to_owned();

        let rest: String = remaining(&text, start).into_iter().collect();
        let matched = s.try_expect_string(&needle);
        prop_assert_eq!(matched, rest.starts_with(&needle));
        if matched {
            prop_assert_eq!(s.pos(), start + needle.chars().count());
            prop_assert_eq!(s.last_match(), needle.as_str());
        } else {
            prop_assert_eq!(s.pos(), start);
            prop_assert_eq!(s.last_match(), before_match.as_str());
        }
    }

    #[test]
    fn try_expect_any_string_picks_longest_match(
        text in prop::string::string_regex("[=<>]{0,6}").expect("valid regex"),
    ) {
        let candidates = ["=", "==", "===", "<", "<="];
        let mut s = TextScanner::new(&text);
        let matched = s.try_expect_any_string(&candidates);
        let longest = candidates
            .iter()
            .filter(|c| text.starts_with(**c))
            .max_by_key(|c| c.len());
        match longest {
            Some(c) => {
                prop_assert!(matched);
                prop_assert_eq!(s.last_match(), *c);
            }
            None => {
                prop_assert!(!matched);
                prop_assert_eq!(s.pos(), 0);
            }
        }
    }

    #[test]
    fn restore_returns_to_snapshot(text in text_strategy(), steps in 0usize..30) {
        let mut s = TextScanner::new(&text);
        let snapshot = s.save_position();
        for _ in 0..steps {
            if s.move_size(1, true).is_err() {
                break;
            }
        }
        s.move_accept(is_digit, false);
        s.restore(snapshot);
        prop_assert_eq!(s.pos(), 0);
        prop_assert!(s.is_start());
    }

    #[test]
    fn back_never_underflows(text in text_strategy(), fwd in 0usize..30, back in 0usize..40) {
        let mut s = TextScanner::new(&text);
        let fwd = fwd.min(text.chars().count());
        s.move_size(fwd, true).unwrap();
        s.back(back);
        prop_assert_eq!(s.pos(), fwd.saturating_sub(back));
    }

    #[test]
    fn preview_is_bounded(text in prop::string::string_regex("[a-z]{0,200}").expect("valid regex"), at in 0usize..220) {
        let len = text.chars().count();
        let mut s = TextScanner::new(&text);
        s.move_size(at.min(len), true).unwrap();
        prop_assert!(s.left_text().chars().count() <= 64);
        let err = s.error("probe");
        prop_assert_eq!(err.pos, at.min(len));
    }
}
