//! Capability traits shared by the crate's containers.
//!
//! Each container implements only the capabilities that match its contract:
//! the node store can be cleared while under construction, a finished
//! [`SuffixTree`](crate::SuffixTree) cannot.

/// Containers that report how many elements they hold.
pub trait Container {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Containers that can drop all of their elements.
pub trait Clearable {
    fn clear(&mut self);
}

/// Containers that can check their own structural invariants.
pub trait Validatable {
    /// `true` if every invariant holds. Must not mutate.
    fn validate(&self) -> bool;
}

/// Containers that can be flattened into an ordered sequence.
pub trait Sequenceable {
    type Item;

    fn to_vec(&self) -> Vec<Self::Item>;
}
