//! # Step emission with pacing and cancellation.
//!
//! [`Stepper`] owns the exclusive borrow of the sequence for one run and is the
//! only handle a strategy receives: the strategy sees the length, and reads or
//! changes the order only through steps. Each step follows the same shape:
//!
//! ```text
//! compare(a, b):  check token ─► on_compare(a, b) ─► pause(Compare) ─► read order
//! swap(a, b):     check token ─► seq.swap(a, b) ─► on_swap(a, b) ─► pause(Swap)
//! ```
//!
//! ## Rules
//! - The token is checked **before** emitting, so nothing is emitted after cancellation.
//! - The pause races the token (biased toward cancellation) and returns
//!   [`SortError::Canceled`] as soon as the token fires.
//! - The sequence is left exactly as the last committed swap left it.

use std::cmp::Ordering;

use tokio_util::sync::CancellationToken;

use crate::error::SortError;
use crate::events::Observe;
use crate::items::Sequence;
use crate::policies::{Pace, StepKind};

/// Sequence of one run, wrapped so every compare and swap is emitted and paced.
pub struct Stepper<'a> {
    seq: &'a mut dyn Sequence,
    observer: &'a mut dyn Observe,
    pace: &'a dyn Pace,
    token: &'a CancellationToken,
    compares: u64,
    swaps: u64,
}

impl<'a> Stepper<'a> {
    /// Creates a stepper for a single run over `seq`.
    pub fn new(
        seq: &'a mut dyn Sequence,
        observer: &'a mut dyn Observe,
        pace: &'a dyn Pace,
        token: &'a CancellationToken,
    ) -> Self {
        Self {
            seq,
            observer,
            pace,
            token,
            compares: 0,
            swaps: 0,
        }
    }

    /// Number of items in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` if the sequence has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Announces a comparison of `a` and `b`, pauses, then returns their order.
    pub async fn compare(&mut self, a: usize, b: usize) -> Result<Ordering, SortError> {
        self.ensure_live()?;
        self.observer.on_compare(a, b);
        self.compares += 1;
        pause(self.token, self.pace, StepKind::Compare).await?;
        Ok(self.seq.compare(a, b))
    }

    /// Exchanges `a` and `b`, announces the swap, then pauses.
    pub async fn swap(&mut self, a: usize, b: usize) -> Result<(), SortError> {
        self.ensure_live()?;
        self.seq.swap(a, b);
        self.observer.on_swap(a, b);
        self.swaps += 1;
        pause(self.token, self.pace, StepKind::Swap).await
    }

    /// Number of compare events emitted so far.
    pub fn compares(&self) -> u64 {
        self.compares
    }

    /// Number of swap events emitted so far.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    fn ensure_live(&self) -> Result<(), SortError> {
        if self.token.is_cancelled() {
            Err(SortError::Canceled)
        } else {
            Ok(())
        }
    }
}

/// Waits out the pace for one step unless the token fires first.
async fn pause(
    token: &CancellationToken,
    pace: &dyn Pace,
    step: StepKind,
) -> Result<(), SortError> {
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(SortError::Canceled),
        _ = pace.pause(step) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::events::Recorder;
    use crate::items::SortItem;
    use crate::policies::PacingPolicy;

    fn items(values: &[u32]) -> Vec<SortItem<u32, ()>> {
        values
            .iter()
            .map(|&v| SortItem::new(v, Arc::new(())))
            .collect()
    }

    #[tokio::test]
    async fn test_compare_emits_then_reports_order() {
        let mut seq = items(&[2, 1]);
        let mut rec = Recorder::new();
        let pace = PacingPolicy::immediate();
        let token = CancellationToken::new();

        let mut steps = Stepper::new(&mut seq, &mut rec, &pace, &token);
        assert_eq!(steps.len(), 2);
        let ord = steps.compare(0, 1).await.unwrap();
        assert_eq!(ord, Ordering::Greater);
        assert_eq!(steps.compares(), 1);
        assert_eq!(steps.swaps(), 0);
        drop(steps);

        assert_eq!(rec.compares(), vec![(0, 1)]);
    }

    #[tokio::test]
    async fn test_swap_commits_before_notifying() {
        let mut seq = items(&[2, 1]);
        let mut rec = Recorder::new();
        let pace = PacingPolicy::immediate();
        let token = CancellationToken::new();

        let mut steps = Stepper::new(&mut seq, &mut rec, &pace, &token);
        steps.swap(0, 1).await.unwrap();
        drop(steps);

        assert_eq!(rec.swaps(), vec![(0, 1)]);
        assert_eq!(*seq[0].value(), 1);
        assert_eq!(*seq[1].value(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_token_emits_nothing() {
        let mut seq = items(&[2, 1]);
        let mut rec = Recorder::new();
        let pace = PacingPolicy::immediate();
        let token = CancellationToken::new();
        token.cancel();

        let mut steps = Stepper::new(&mut seq, &mut rec, &pace, &token);
        assert_eq!(steps.compare(0, 1).await, Err(SortError::Canceled));
        assert_eq!(steps.swap(0, 1).await, Err(SortError::Canceled));
        drop(steps);

        assert!(rec.events().is_empty());
        assert_eq!(*seq[0].value(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts_pause() {
        let mut seq = items(&[1, 2]);
        let mut rec = Recorder::new();
        let pace = PacingPolicy::uniform(std::time::Duration::from_secs(3600));
        let token = CancellationToken::new();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            canceller.cancel();
        });

        let mut steps = Stepper::new(&mut seq, &mut rec, &pace, &token);
        let res = steps.compare(0, 1).await;
        assert_eq!(res, Err(SortError::Canceled));
        drop(steps);

        // The compare was announced before the pause began.
        assert_eq!(rec.compares(), vec![(0, 1)]);
    }
}
