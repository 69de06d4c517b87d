//! Suffix tree indexing module
//!
//! This module provides linear-time suffix tree construction and O(m)
//! substring search over an arbitrary alphabet.
//!
//! ## Architecture
//!
//! - `symbol`: Alphabet bound and default sentinels
//! - `text`: Borrowed input with a virtual terminal sentinel
//! - `store`: Node arena with sorted child edges
//! - `active`: Active point used during construction
//! - `builder`: Online (Ukkonen) construction and finalization
//! - `query`: Substring search, occurrences and suffix enumeration
//! - `validate`: Invariant checker
//! - `types`: Core type definitions

pub mod active;
pub mod builder;
pub mod query;
pub mod store;
pub mod symbol;
pub mod text;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use builder::SuffixTreeBuilder;
pub use query::{SuffixTree, Suffixes};
pub use symbol::Symbol;
pub use text::Text;
pub use types::{NodeId, SuffixEntry, TreeStats};
pub use validate::Violation;
