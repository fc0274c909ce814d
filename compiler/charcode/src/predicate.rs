//! Character predicates.
//!
//! A scanner takes predicates in two roles: as an *acceptor* (keep consuming
//! while it holds) and as a *terminator* (stop when it holds). Both roles use
//! the same [`CharPredicate`] capability, so any closure, set or class works
//! in either position.

use crate::class::CharClass;

/// A pure test on a single character.
pub trait CharPredicate {
    /// Returns `true` if `ch` satisfies the predicate.
    fn accept(&self, ch: char) -> bool;
}

impl<F> CharPredicate for F
where
    F: Fn(char) -> bool,
{
    #[inline]
    fn accept(&self, ch: char) -> bool {
        self(ch)
    }
}

/// Set membership over a borrowed slice of characters.
///
/// Linear lookup; intended for the short sets scanners deal in
/// (delimiters, whitespace, quote characters).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharSet<'a>(pub &'a [char]);

impl<'a> CharSet<'a> {
    /// Wrap `chars` as a predicate.
    pub const fn new(chars: &'a [char]) -> Self {
        Self(chars)
    }

    /// The underlying characters.
    pub const fn chars(self) -> &'a [char] {
        self.0
    }

    /// Returns `true` if `ch` is a member.
    #[inline]
    pub fn contains(self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl CharPredicate for CharSet<'_> {
    #[inline]
    fn accept(&self, ch: char) -> bool {
        self.contains(ch)
    }
}

impl CharPredicate for CharClass {
    #[inline]
    fn accept(&self, ch: char) -> bool {
        self.matches(ch)
    }
}

/// Either predicate holds. Built by [`CharPredicateExt::or`].
#[derive(Clone, Copy, Debug)]
pub struct Or<A, B>(A, B);

impl<A: CharPredicate, B: CharPredicate> CharPredicate for Or<A, B> {
    #[inline]
    fn accept(&self, ch: char) -> bool {
        self.0.accept(ch) || self.1.accept(ch)
    }
}

/// Both predicates hold. Built by [`CharPredicateExt::and`].
#[derive(Clone, Copy, Debug)]
pub struct And<A, B>(A, B);

impl<A: CharPredicate, B: CharPredicate> CharPredicate for And<A, B> {
    #[inline]
    fn accept(&self, ch: char) -> bool {
        self.0.accept(ch) && self.1.accept(ch)
    }
}

/// Negation. Built by [`CharPredicateExt::not`].
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(P);

impl<P: CharPredicate> CharPredicate for Not<P> {
    #[inline]
    fn accept(&self, ch: char) -> bool {
        !self.0.accept(ch)
    }
}

/// Combinators available on every [`CharPredicate`].
pub trait CharPredicateExt: CharPredicate + Sized {
    /// Holds when `self` or `other` holds.
    fn or<P: CharPredicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Holds when `self` and `other` both hold.
    fn and<P: CharPredicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Holds when `self` does not.
    #[allow(
        clippy::should_implement_trait,
        reason = "predicate negation, not std::ops::Not on a value"
    )]
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<P: CharPredicate> CharPredicateExt for P {}
