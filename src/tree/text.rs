//! Text buffer: the immutable indexed sequence plus its terminal sentinel.
//!
//! The buffer borrows the caller's symbols instead of copying them. The
//! sentinel is never written anywhere; it is served virtually at index `n`.
//! Every tree built over a `Text<'t, T>` carries the `'t` lifetime, so the
//! input cannot be freed while the tree is alive.

use super::symbol::Symbol;
use crate::error::{Result, TreeError};

/// Input symbols with a virtual sentinel appended at the end.
#[derive(Debug, Clone, Copy)]
pub struct Text<'t, T> {
    symbols: &'t [T],
    sentinel: T,
}

impl<'t, T: Symbol> Text<'t, T> {
    /// Load a text using the alphabet's default sentinel.
    pub fn load(symbols: &'t [T]) -> Result<Self> {
        Self::with_sentinel(symbols, T::SENTINEL)
    }

    /// Load a text terminated by `sentinel`.
    ///
    /// Fails with [`TreeError::EmptyInput`] for an empty slice and with
    /// [`TreeError::NonUniqueSentinel`] if `sentinel` occurs in `symbols`.
    pub fn with_sentinel(symbols: &'t [T], sentinel: T) -> Result<Self> {
        if symbols.is_empty() {
            return Err(TreeError::EmptyInput);
        }

        if let Some(position) = T::find(symbols, sentinel) {
            return Err(TreeError::NonUniqueSentinel { position });
        }

        Ok(Self { symbols, sentinel })
    }

    /// Length including the sentinel (`n + 1`).
    #[inline]
    pub fn length(&self) -> usize {
        self.symbols.len() + 1
    }

    /// Symbol at `index`, where `index == n` is the sentinel.
    pub fn symbol_at(&self, index: usize) -> Result<T> {
        if index < self.length() {
            Ok(self.at(index))
        } else {
            Err(TreeError::IndexOutOfRange {
                index,
                len: self.length(),
            })
        }
    }

    /// Unchecked-by-contract access for callers that already hold a valid
    /// index (edge labels, active points).
    #[inline]
    pub(crate) fn at(&self, index: usize) -> T {
        debug_assert!(index < self.length());
        match self.symbols.get(index) {
            Some(&symbol) => symbol,
            None => self.sentinel,
        }
    }

    /// Symbols of `[start, end)`, sentinel included when `end == n + 1`.
    #[inline]
    pub fn range(&self, start: usize, end: usize) -> impl Iterator<Item = T> + '_ {
        (start..end).map(move |i| self.at(i))
    }

    /// The suffix starting at `start`, sentinel included.
    pub fn suffix(&self, start: usize) -> Vec<T> {
        self.range(start, self.length()).collect()
    }

    /// The borrowed input without the sentinel.
    #[inline]
    pub fn symbols(&self) -> &'t [T] {
        self.symbols
    }

    #[inline]
    pub fn sentinel(&self) -> T {
        self.sentinel
    }
}
