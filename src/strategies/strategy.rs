//! # Strategy abstraction.
//!
//! A [`SortStrategy`] is one sorting algorithm behind a single async entry
//! point. Strategies hold no mutable state: the same instance can be shared
//! through [`StrategyRef`] and reused across runs or orchestrators.
//!
//! A strategy never holds the sequence itself. It receives a [`Stepper`] that
//! owns the run's exclusive borrow, so the only way to read or change the order
//! is a step, and every step reaches the observer.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SortError;
use crate::strategies::Stepper;

/// Shared handle to a strategy.
pub type StrategyRef = Arc<dyn SortStrategy>;

/// # Pluggable sorting algorithm.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use sortvisor::{SortError, SortStrategy, Stepper};
///
/// /// Sorts two-element sequences only.
/// struct PairSort;
///
/// #[async_trait]
/// impl SortStrategy for PairSort {
///     fn name(&self) -> &'static str { "pair" }
///
///     async fn sort(&self, steps: &mut Stepper<'_>) -> Result<(), SortError> {
///         if steps.len() == 2 && steps.compare(0, 1).await?.is_gt() {
///             steps.swap(0, 1).await?;
///         }
///         Ok(())
///     }
/// }
/// ```
///
/// The sequence behind a stepper is private; a strategy cannot bypass the steps:
/// ```compile_fail
/// use async_trait::async_trait;
/// use sortvisor::{SortError, SortStrategy, Stepper};
///
/// struct Sneaky;
///
/// #[async_trait]
/// impl SortStrategy for Sneaky {
///     fn name(&self) -> &'static str { "sneaky" }
///
///     async fn sort(&self, steps: &mut Stepper<'_>) -> Result<(), SortError> {
///         steps.seq.swap(0, 1);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait SortStrategy: Send + Sync + 'static {
    /// Returns a stable, human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Sorts the run's sequence in place through `steps`.
    ///
    /// ### Contract
    /// - Every comparison goes through [`Stepper::compare`], in algorithm order.
    /// - Every exchange goes through [`Stepper::swap`]; no swap without movement.
    /// - Errors from the stepper (cancellation) are propagated with `?` unchanged.
    /// - Sequences shorter than two items finish with zero events.
    async fn sort(&self, steps: &mut Stepper<'_>) -> Result<(), SortError>;
}
