//! # Bubble sort.
//!
//! Classic two-index passes with **no early exit**: a sequence of `n` items
//! always costs exactly `n(n-1)/2` comparisons, whatever its initial order.
//! The number of swaps equals the number of inversions in the input.
//!
//! ```text
//! for i in 0..n-1:
//!   for j in 0..n-1-i:
//!     compare(j, j+1)
//!     if item[j] > item[j+1]: swap(j, j+1)
//! ```

use std::cmp::Ordering;

use async_trait::async_trait;

use crate::error::SortError;
use crate::strategies::{SortStrategy, Stepper};

/// Bubble sort strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

#[async_trait]
impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    async fn sort(&self, steps: &mut Stepper<'_>) -> Result<(), SortError> {
        let n = steps.len();
        if n < 2 {
            return Ok(());
        }

        for i in 0..n - 1 {
            for j in 0..n - 1 - i {
                if steps.compare(j, j + 1).await? == Ordering::Greater {
                    steps.swap(j, j + 1).await?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        assert_pairing, inversions, items, run_strategy, sample_inputs, values,
    };

    #[tokio::test]
    async fn test_three_one_two_event_sequence() {
        let mut seq = items(&[3, 1, 2]);
        let rec = run_strategy(&BubbleSort, &mut seq).await.unwrap();

        assert_eq!(rec.compares(), vec![(0, 1), (1, 2), (0, 1)]);
        assert_eq!(rec.swaps(), vec![(0, 1), (1, 2)]);
        assert_eq!(values(&seq), vec![1, 2, 3]);
        assert!(!rec.completed(), "completion belongs to the orchestrator");
    }

    #[tokio::test]
    async fn test_events_interleave_compare_then_swap() {
        let mut seq = items(&[3, 1, 2]);
        let rec = run_strategy(&BubbleSort, &mut seq).await.unwrap();

        let kinds: Vec<&str> = rec.events().iter().map(|e| e.kind.as_label()).collect();
        assert_eq!(kinds, vec!["compare", "swap", "compare", "swap", "compare"]);
    }

    #[tokio::test]
    async fn test_compare_count_is_quadratic_regardless_of_order() {
        for input in sample_inputs() {
            let n = input.len();
            let mut seq = items(&input);
            let rec = run_strategy(&BubbleSort, &mut seq).await.unwrap();
            assert_eq!(rec.compares().len(), n * n.saturating_sub(1) / 2, "input {input:?}");
        }
    }

    #[tokio::test]
    async fn test_swap_count_equals_inversions() {
        for input in sample_inputs() {
            let mut seq = items(&input);
            let rec = run_strategy(&BubbleSort, &mut seq).await.unwrap();
            assert_eq!(rec.swaps().len(), inversions(&input), "input {input:?}");
        }
    }

    #[tokio::test]
    async fn test_sorts_and_keeps_pairing() {
        for input in sample_inputs() {
            let mut seq = items(&input);
            run_strategy(&BubbleSort, &mut seq).await.unwrap();

            let mut expected = input.clone();
            expected.sort_unstable();
            assert_eq!(values(&seq), expected);
            assert_pairing(&seq);
        }
    }

    #[tokio::test]
    async fn test_sorted_input_has_no_swaps() {
        let mut seq = items(&[1, 2, 3, 4]);
        let rec = run_strategy(&BubbleSort, &mut seq).await.unwrap();
        assert_eq!(rec.compares().len(), 6);
        assert!(rec.swaps().is_empty());
    }

    #[tokio::test]
    async fn test_tiny_inputs_emit_nothing() {
        for input in [vec![], vec![9]] {
            let mut seq = items(&input);
            let rec = run_strategy(&BubbleSort, &mut seq).await.unwrap();
            assert!(rec.events().is_empty());
        }
    }
}
