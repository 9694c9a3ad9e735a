//! # Sequence item.
//!
//! A [`SortItem`] pairs an ordering key with a payload shared through [`Arc`].
//! The key is fixed at construction; sorting and shuffling only move items
//! around, so the payload always travels with the key it was created with.

use std::fmt;
use std::sync::Arc;

/// One sortable unit: an ordering key and an opaque display payload.
///
/// The engine compares keys and moves items; it never looks inside the payload.
pub struct SortItem<K, P> {
    value: K,
    payload: Arc<P>,
}

impl<K, P> SortItem<K, P> {
    /// Creates an item from a key and a shared payload.
    pub fn new(value: K, payload: Arc<P>) -> Self {
        Self { value, payload }
    }

    /// Returns the ordering key.
    #[inline]
    pub fn value(&self) -> &K {
        &self.value
    }

    /// Returns the shared payload.
    #[inline]
    pub fn payload(&self) -> &Arc<P> {
        &self.payload
    }

    /// Splits the item into its key and payload.
    pub fn into_parts(self) -> (K, Arc<P>) {
        (self.value, self.payload)
    }
}

impl<K: Clone, P> Clone for SortItem<K, P> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            payload: Arc::clone(&self.payload),
        }
    }
}

impl<K: fmt::Debug, P> fmt::Debug for SortItem<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortItem")
            .field("value", &self.value)
            .field("payload", &Arc::as_ptr(&self.payload))
            .finish()
    }
}
