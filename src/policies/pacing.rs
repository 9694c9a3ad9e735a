//! # Pacing between emitted steps.
//!
//! [`Pace`] is awaited by the engine right after each compare or swap event.
//! It never sees the sequence and cannot alter the event order; it only decides
//! how long the single sorting task stays suspended.
//!
//! - [`PacingPolicy`] sleeps a fixed duration per [`StepKind`].
//! - A zero duration still yields to the runtime, so a cancellation request or
//!   a presentation task sharing the runtime gets a chance to run.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use sortvisor::{PacingPolicy, StepKind};
//!
//! let pacing = PacingPolicy {
//!     compare: Duration::from_millis(5),
//!     swap: Duration::from_millis(40),
//! };
//! assert_eq!(pacing.delay(StepKind::Swap), Duration::from_millis(40));
//! ```

use std::time::Duration;

use async_trait::async_trait;

/// Kind of step the engine is pausing after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Two positions were announced for comparison.
    Compare,
    /// Two positions were exchanged.
    Swap,
}

/// Injectable pause awaited at every yield point of a run.
///
/// ### Implementation requirements
/// - Must not block the executor; use async timers.
/// - Must be cancel-safe: the engine races the pause against the run's
///   cancellation token and drops it when cancellation wins.
#[async_trait]
pub trait Pace: Send + Sync {
    /// Suspends the running sort after a step of the given kind.
    async fn pause(&self, step: StepKind);
}

/// Fixed per-step delays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacingPolicy {
    /// Pause after each compare event.
    pub compare: Duration,
    /// Pause after each swap event.
    pub swap: Duration,
}

impl PacingPolicy {
    /// Zero delays: every pause is a bare cooperative yield.
    pub const fn immediate() -> Self {
        Self {
            compare: Duration::ZERO,
            swap: Duration::ZERO,
        }
    }

    /// Same delay for both step kinds.
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            compare: delay,
            swap: delay,
        }
    }

    /// Returns the configured delay for a step kind.
    #[inline]
    pub fn delay(&self, step: StepKind) -> Duration {
        match step {
            StepKind::Compare => self.compare,
            StepKind::Swap => self.swap,
        }
    }
}

impl Default for PacingPolicy {
    /// Returns 20ms for both step kinds.
    fn default() -> Self {
        Self::uniform(Duration::from_millis(20))
    }
}

#[async_trait]
impl Pace for PacingPolicy {
    async fn pause(&self, step: StepKind) {
        let delay = self.delay(step);
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}
