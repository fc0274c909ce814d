//! ASCII character classes.
//!
//! Every ASCII code point maps to a precomputed [`CharClass`] through a
//! 128-entry table, so a membership test is one indexed read plus a mask.
//! Characters outside ASCII have the empty class; callers that need
//! Unicode-aware rules pass their own predicate instead.

use bitflags::bitflags;

/// Space.
pub const SP: char = ' ';
/// Horizontal tab.
pub const TAB: char = '\t';
/// Carriage return.
pub const CR: char = '\r';
/// Line feed.
pub const LF: char = '\n';
/// Low line, the word-joining character accepted at the start of identifiers.
pub const LOWBAR: char = '_';

/// Space and tab.
pub const SP_TAB: &[char] = &[SP, TAB];
/// Line terminators.
pub const CR_LF: &[char] = &[CR, LF];
/// Space, tab and line terminators.
pub const SP_TAB_CR_LF: &[char] = &[SP, TAB, CR, LF];

bitflags! {
    /// Class bits for a single character.
    ///
    /// A character may carry several bits: `'a'` is `ALPHA | HEX |
    /// IDENT_START | IDENT`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u16 {
        // === Whitespace ===

        /// `' '`
        const SPACE = 1 << 0;
        /// `'\t'`
        const TAB = 1 << 1;
        /// `'\r'`
        const CR = 1 << 2;
        /// `'\n'`
        const LF = 1 << 3;

        // === Word characters ===

        /// `a-z`, `A-Z`
        const ALPHA = 1 << 4;
        /// `0-9`
        const DIGIT = 1 << 5;
        /// `0-9`, `a-f`, `A-F`
        const HEX = 1 << 6;
        /// `_`
        const LOWBAR = 1 << 7;

        // === Identifier ===

        /// May start an identifier: alpha or `_`.
        const IDENT_START = 1 << 8;
        /// May continue an identifier: alpha, digit or `_`.
        const IDENT = 1 << 9;
    }
}

impl CharClass {
    /// Space or tab.
    pub const SPACE_TAB: Self = Self::SPACE.union(Self::TAB);
    /// Space, tab, CR or LF.
    pub const WHITE: Self = Self::SPACE_TAB.union(Self::CR).union(Self::LF);

    /// Returns `true` if `ch` carries any of the bits in `self`.
    #[inline]
    pub fn matches(self, ch: char) -> bool {
        class_of(ch).intersects(self)
    }
}

/// Class bits for every ASCII code point. Index is the code point.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..128, always fits in u8"
)]
static ASCII_CLASS_TABLE: [CharClass; 128] = {
    let mut table = [CharClass::empty(); 128];
    let mut i = 0usize;
    while i < 128 {
        let b = i as u8;
        let mut bits = CharClass::empty();
        if b == b' ' {
            bits = bits.union(CharClass::SPACE);
        }
        if b == b'\t' {
            bits = bits.union(CharClass::TAB);
        }
        if b == b'\r' {
            bits = bits.union(CharClass::CR);
        }
        if b == b'\n' {
            bits = bits.union(CharClass::LF);
        }
        if b.is_ascii_alphabetic() {
            bits = bits
                .union(CharClass::ALPHA)
                .union(CharClass::IDENT_START)
                .union(CharClass::IDENT);
        }
        if b.is_ascii_digit() {
            bits = bits.union(CharClass::DIGIT).union(CharClass::IDENT);
        }
        if b.is_ascii_hexdigit() {
            bits = bits.union(CharClass::HEX);
        }
        if b == b'_' {
            bits = bits
                .union(CharClass::LOWBAR)
                .union(CharClass::IDENT_START)
                .union(CharClass::IDENT);
        }
        table[i] = bits;
        i += 1;
    }
    table
};

/// Returns the class bits of `ch`; empty for non-ASCII characters.
#[inline]
pub fn class_of(ch: char) -> CharClass {
    ASCII_CLASS_TABLE
        .get(ch as usize)
        .copied()
        .unwrap_or(CharClass::empty())
}

/// `a-z` or `A-Z`.
#[inline]
pub fn is_alpha(ch: char) -> bool {
    class_of(ch).contains(CharClass::ALPHA)
}

/// `0-9`.
#[inline]
pub fn is_digit(ch: char) -> bool {
    class_of(ch).contains(CharClass::DIGIT)
}

/// Hexadecimal digit, either case.
#[inline]
pub fn is_hex(ch: char) -> bool {
    class_of(ch).contains(CharClass::HEX)
}

/// Space, tab, CR or LF.
#[inline]
pub fn is_white(ch: char) -> bool {
    class_of(ch).intersects(CharClass::WHITE)
}

/// Space or tab.
#[inline]
pub fn is_space_tab(ch: char) -> bool {
    class_of(ch).intersects(CharClass::SPACE_TAB)
}

/// Alpha or [`LOWBAR`].
#[inline]
pub fn is_ident_start(ch: char) -> bool {
    class_of(ch).contains(CharClass::IDENT_START)
}

/// Alpha, digit or [`LOWBAR`].
#[inline]
pub fn is_ident(ch: char) -> bool {
    class_of(ch).contains(CharClass::IDENT)
}
