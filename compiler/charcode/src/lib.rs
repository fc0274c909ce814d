//! Character classification for hand-written scanners.
//!
//! Two layers:
//! - [`class`]: ASCII class tables (`CharClass` bits, named characters,
//!   whitespace sets, `is_*` tests).
//! - [`predicate`]: the [`CharPredicate`] capability consumed by scanners as
//!   acceptors and terminators, plus combinators.
//!
//! Everything here is pure. Nothing allocates.

pub mod class;
pub mod predicate;

pub use class::{
    class_of, is_alpha, is_digit, is_hex, is_ident, is_ident_start, is_space_tab, is_white,
    CharClass, CR, CR_LF, LF, LOWBAR, SP, SP_TAB, SP_TAB_CR_LF, TAB,
};
pub use predicate::{And, CharPredicate, CharPredicateExt, CharSet, Not, Or};
