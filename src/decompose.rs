//! Splitting a key into its first element and the remainder.

/// A sequence that can be taken apart into `(head, tail)`.
///
/// Every recursive trie operation consumes its key one element at a time
/// through this trait. An empty sequence has no head and yields `None`.
pub trait Decompose {
    /// The element type of the sequence.
    type Item;

    /// Splits off the first element, or returns `None` if the sequence is empty.
    fn decompose(&self) -> Option<(&Self::Item, &Self)>;
}

impl<T> Decompose for [T] {
    type Item = T;

    fn decompose(&self) -> Option<(&T, &[T])> {
        self.split_first()
    }
}
