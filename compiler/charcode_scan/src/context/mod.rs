//! Named scan contexts for nested grammar regions.
//!
//! A lexer pushes a [`ScanContext`] when it enters a region that changes how
//! characters are read ("inside string literal", "inside template
//! interpolation") and pops it on exit. The stack answers two questions:
//! what region am I directly in ([`ContextStack::is_context`]), and am I
//! anywhere inside a region of this kind ([`ContextStack::has`]).
//!
//! Each context carries its own small key/value store. Values are a closed
//! set of variants ([`ContextValue`]) rather than arbitrary objects.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A value stored in a [`ScanContext`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContextValue {
    Bool(bool),
    Int(i64),
    Char(char),
    Text(String),
    /// A character offset into the scanned text (e.g. where a literal began).
    Offset(usize),
}

impl ContextValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_offset(&self) -> Option<usize> {
        match self {
            Self::Offset(o) => Some(*o),
            _ => None,
        }
    }
}

impl From<bool> for ContextValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ContextValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<char> for ContextValue {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// A named bag of state for one nested region.
///
/// Names need not be unique across the stack: a template inside a template
/// pushes two contexts with the same name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanContext {
    name: String,
    data: FxHashMap<String, ContextValue>,
}

impl ScanContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store `value` under `key`, returning the previous value if any.
    pub fn put(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ContextValue>,
    ) -> Option<ContextValue> {
        self.data.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.data.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ContextValue> {
        self.data.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ContextValue> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

/// LIFO stack of [`ScanContext`]s. The last element is the innermost region.
#[derive(Clone, Debug, Default)]
pub struct ContextStack {
    contexts: SmallVec<[ScanContext; 4]>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a region.
    pub fn push(&mut self, context: ScanContext) {
        tracing::trace!(name = context.name(), depth = self.contexts.len() + 1, "push context");
        self.contexts.push(context);
    }

    /// Leave the innermost region, returning its context.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Every `pop` must pair with an earlier
    /// `push`; use [`try_pop`](Self::try_pop) when that is not known.
    pub fn pop(&mut self) -> ScanContext {
        match self.try_pop() {
            Some(context) => context,
            None => panic!("pop on an empty context stack"),
        }
    }

    /// Like [`pop`](Self::pop), but returns `None` on an empty stack.
    pub fn try_pop(&mut self) -> Option<ScanContext> {
        let context = self.contexts.pop()?;
        tracing::trace!(name = context.name(), depth = self.contexts.len(), "pop context");
        Some(context)
    }

    /// The innermost context, if any.
    pub fn peek(&self) -> Option<&ScanContext> {
        self.contexts.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut ScanContext> {
        self.contexts.last_mut()
    }

    /// Returns `true` if the innermost context is named `name`.
    pub fn is_context(&self, name: &str) -> bool {
        self.peek().is_some_and(|c| c.name == name)
    }

    /// Returns `true` if any context on the stack is named `name`.
    pub fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// The nearest (innermost) context named `name`.
    pub fn find(&self, name: &str) -> Option<&ScanContext> {
        self.iter().find(|c| c.name == name)
    }

    /// Mutable access to the nearest context named `name`, wherever it sits
    /// on the stack.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ScanContext> {
        self.contexts.iter_mut().rev().find(|c| c.name == name)
    }

    /// Contexts from innermost to outermost.
    pub fn iter(&self) -> impl Iterator<Item = &ScanContext> {
        self.contexts.iter().rev()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    #[inline]
    pub fn is_not_empty(&self) -> bool {
        !self.contexts.is_empty()
    }
}

#[cfg(test)]
mod tests;
