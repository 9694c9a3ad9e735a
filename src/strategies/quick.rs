//! # Quick sort (Lomuto partition, last-element pivot).
//!
//! In-place and recursive. The pivot is always the element at the high end of
//! the current range, so already sorted input degrades to `O(n²)` comparisons.
//!
//! ```text
//! partition(low, high):
//!   store = low
//!   for j in low..high:
//!     compare(j, high)
//!     if item[j] < pivot:
//!       if store != j: swap(store, j)
//!       store += 1
//!   if store != high: swap(store, high)
//!   return store
//!
//! sort(low, high):
//!   if low < high:
//!     p = partition(low, high)
//!     sort(low, p - 1)      // left first
//!     sort(p + 1, high)
//! ```

use std::cmp::Ordering;

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;

use crate::error::SortError;
use crate::strategies::{SortStrategy, Stepper};

/// Quick sort strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl QuickSort {
    /// Partitions `low..=high` around the item at `high` and returns the pivot's final index.
    ///
    /// Items smaller than the pivot end up left of it; equal and greater items right of it.
    pub async fn partition(
        steps: &mut Stepper<'_>,
        low: usize,
        high: usize,
    ) -> Result<usize, SortError> {
        let mut store = low;
        for j in low..high {
            if steps.compare(j, high).await? == Ordering::Less {
                if store != j {
                    steps.swap(store, j).await?;
                }
                store += 1;
            }
        }
        if store != high {
            steps.swap(store, high).await?;
        }
        Ok(store)
    }

    fn sort_range<'a, 's: 'a>(
        steps: &'a mut Stepper<'s>,
        low: usize,
        high: usize,
    ) -> BoxFuture<'a, Result<(), SortError>> {
        async move {
            if low >= high {
                return Ok(());
            }
            let pivot = Self::partition(steps, low, high).await?;
            if pivot > low {
                Self::sort_range(steps, low, pivot - 1).await?;
            }
            Self::sort_range(steps, pivot + 1, high).await
        }
        .boxed()
    }
}

#[async_trait]
impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "quick"
    }

    async fn sort(&self, steps: &mut Stepper<'_>) -> Result<(), SortError> {
        let n = steps.len();
        if n < 2 {
            return Ok(());
        }
        Self::sort_range(steps, 0, n - 1).await
    }
}
