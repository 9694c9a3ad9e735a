//! # Sequence abstraction used by strategies.
//!
//! Strategies are trait objects, so they cannot be generic over the key and
//! payload types. [`Sequence`] erases both: a strategy only needs the length,
//! an ordering between two positions, and a way to exchange them.
//!
//! Implemented for `[SortItem]`, `Vec<SortItem>` and `&mut S` for any sequence
//! `S`, so a caller holding a borrowed slice passes `&mut slice` to `run_sort`.

use std::cmp::Ordering;

use crate::items::SortItem;

/// Mutable, index-addressable sequence of sortable items.
///
/// ### Rules
/// - `compare` only reads keys; it never reorders.
/// - `swap` is the only mutation; it moves whole items, so keys and payloads stay paired.
/// - Indices are always `< len()`; implementations may panic otherwise, like slice indexing.
pub trait Sequence: Send {
    /// Number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Orders the key at `a` against the key at `b`.
    fn compare(&self, a: usize, b: usize) -> Ordering;

    /// Exchanges the items at `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);
}

impl<K, P> Sequence for [SortItem<K, P>]
where
    K: Ord + Send,
    P: Send + Sync,
{
    fn len(&self) -> usize {
        <[_]>::len(self)
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        self[a].value().cmp(self[b].value())
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[_]>::swap(self, a, b);
    }
}

impl<K, P> Sequence for Vec<SortItem<K, P>>
where
    K: Ord + Send,
    P: Send + Sync,
{
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        Sequence::compare(self.as_slice(), a, b)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        (**self).compare(a, b)
    }

    fn swap(&mut self, a: usize, b: usize) {
        (**self).swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_vec_sequence() {
        let mut seq: Vec<SortItem<i32, ()>> = [5, 1, 3]
            .into_iter()
            .map(|v| SortItem::new(v, Arc::new(())))
            .collect();

        assert_eq!(Sequence::len(&seq), 3);
        assert_eq!(seq.compare(0, 1), Ordering::Greater);
        assert_eq!(seq.compare(1, 2), Ordering::Less);

        Sequence::swap(&mut seq, 0, 1);
        let values: Vec<i32> = seq.iter().map(|it| *it.value()).collect();
        assert_eq!(values, vec![1, 5, 3]);
    }

    #[test]
    fn test_borrowed_slice_sequence() {
        let mut items: Vec<SortItem<i32, ()>> = [9, 4, 2, 7]
            .into_iter()
            .map(|v| SortItem::new(v, Arc::new(())))
            .collect();

        let mut tail: &mut [SortItem<i32, ()>] = &mut items[1..];
        let seq: &mut dyn Sequence = &mut tail;
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.compare(0, 1), Ordering::Greater);
        seq.swap(0, 1);

        let values: Vec<i32> = items.iter().map(|it| *it.value()).collect();
        assert_eq!(values, vec![9, 2, 4, 7]);
    }
}
