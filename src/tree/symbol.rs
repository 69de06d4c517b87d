//! Alphabet bound for suffix tree symbols.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as symbols of an indexed text.
///
/// - `Copy`: edges and the text buffer hand out symbols by value
/// - `Ord`: child edges are kept sorted by first symbol
/// - `Hash`: suffix sets and validation bookkeeping
/// - `Debug`: diagnostics in construction errors
/// - `Send + Sync`: finished trees are shared across query threads
///
/// `SENTINEL` is the default terminal appended to every text. It is the
/// smallest value of the type, so enumeration in ascending symbol order
/// yields suffixes in lexicographic order.
pub trait Symbol: Copy + Eq + Ord + Hash + Debug + Send + Sync {
    /// Default terminal symbol.
    const SENTINEL: Self;

    /// Position of the first occurrence of `needle` in `haystack`.
    #[inline]
    fn find(haystack: &[Self], needle: Self) -> Option<usize> {
        haystack.iter().position(|&s| s == needle)
    }
}

impl Symbol for u8 {
    const SENTINEL: Self = 0x00;

    #[inline]
    fn find(haystack: &[Self], needle: Self) -> Option<usize> {
        memchr::memchr(needle, haystack)
    }
}

impl Symbol for char {
    const SENTINEL: Self = '\0';
}

impl Symbol for u16 {
    const SENTINEL: Self = 0;
}

impl Symbol for u32 {
    const SENTINEL: Self = 0;
}

impl Symbol for u64 {
    const SENTINEL: Self = 0;
}
