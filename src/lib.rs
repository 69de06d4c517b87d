//! # SUFX - Suffix Tree Indexing
//!
//! SUFX builds a suffix tree over a text in linear time (Ukkonen's online
//! algorithm) and answers substring queries in time proportional to the
//! pattern, independent of the text size.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Text buffer, node arena, construction and queries
//! - [`error`] - Construction error taxonomy
//! - [`collections`] - Capability traits shared by the containers
//! - [`config`] - Command-line configuration file
//! - [`output`] - Result formatting for the `sufx` binary
//! - [`utils`] - Progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use sufx::build_suffix_tree;
//!
//! let tree = build_suffix_tree(b"banana").unwrap();
//!
//! assert!(tree.contains(b"ana"));
//! assert!(!tree.contains(b"nab"));
//! assert_eq!(tree.occurrences(b"ana"), vec![1, 3]);
//!
//! for entry in tree.enumerate_suffixes() {
//!     println!("{}: {:?}", entry.start, entry.symbols);
//! }
//! ```
//!
//! ## Lifetimes
//!
//! The tree stores edge labels as index ranges into the caller's text and
//! borrows it for its whole lifetime: `SuffixTree<'t, T>` cannot outlive the
//! slice it was built from.

pub mod collections;
pub mod config;
pub mod error;
pub mod output;
pub mod tree;
pub mod utils;

pub use error::{Result, StoreError, TreeError};
pub use tree::{Suffixes, SuffixEntry, SuffixTree, SuffixTreeBuilder, Symbol, TreeStats, Violation};

/// Build a suffix tree over `text` terminated by the alphabet's default
/// sentinel.
///
/// Fails with [`TreeError::EmptyInput`] or [`TreeError::NonUniqueSentinel`]
/// before any construction work is done.
pub fn build_suffix_tree<T: Symbol>(text: &[T]) -> Result<SuffixTree<'_, T>> {
    SuffixTreeBuilder::new(text).build()
}
