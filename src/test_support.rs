//! Test-only helpers for building sequences and driving strategies.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::SortError;
use crate::events::Recorder;
use crate::items::SortItem;
use crate::policies::PacingPolicy;
use crate::strategies::{SortStrategy, Stepper};

/// Items keyed by `values`, each with a distinct payload naming its key.
pub fn items(values: &[u32]) -> Vec<SortItem<u32, String>> {
    values
        .iter()
        .map(|&v| SortItem::new(v, Arc::new(format!("payload-{v}"))))
        .collect()
}

/// Current key order.
pub fn values<P>(seq: &[SortItem<u32, P>]) -> Vec<u32> {
    seq.iter().map(|it| *it.value()).collect()
}

/// Runs `strategy` on `seq` without pacing and returns the recorded events.
pub async fn run_strategy(
    strategy: &dyn SortStrategy,
    seq: &mut Vec<SortItem<u32, String>>,
) -> Result<Recorder, SortError> {
    let mut rec = Recorder::new();
    let pace = PacingPolicy::immediate();
    let token = CancellationToken::new();
    let mut steps = Stepper::new(seq, &mut rec, &pace, &token);
    strategy.sort(&mut steps).await?;
    drop(steps);
    Ok(rec)
}

/// Number of pairs `(i, j)` with `i < j` and `values[i] > values[j]`.
pub fn inversions(values: &[u32]) -> usize {
    let mut count = 0;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i] > values[j] {
                count += 1;
            }
        }
    }
    count
}

/// Asserts every payload still names the key it travels with.
pub fn assert_pairing(seq: &[SortItem<u32, String>]) {
    for it in seq {
        assert_eq!(it.payload().as_str(), format!("payload-{}", it.value()));
    }
}

/// Deterministic pseudo-random inputs of several lengths.
pub fn sample_inputs() -> Vec<Vec<u32>> {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut out = vec![vec![], vec![7], vec![2, 1], vec![1, 2, 3], vec![3, 2, 1], vec![4, 4, 1, 4]];
    for len in [5usize, 8, 13, 21] {
        out.push((0..len).map(|_| rng.random_range(0..10)).collect());
    }
    out
}
