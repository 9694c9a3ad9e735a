//! # Orchestrator: runs one strategy at a time and relays its events.
//!
//! The [`Orchestrator`] owns the run state and the pacing policy. It accepts a
//! strategy and a sequence, drives the strategy to completion on the calling
//! task, and signals completion to the observer exactly once.
//!
//! ## State machine
//! ```text
//!            run_sort accepted
//!   Idle ─────────────────────────► Running
//!    ▲                                 │
//!    └──── completed / cancelled / ────┘
//!          future dropped
//! ```
//!
//! ## Event flow
//! ```text
//! run_sort(strategy, seq, observer)
//!   ├─ strategy missing  → warn, Err(MissingStrategy)       (no events)
//!   ├─ already running   → warn, Err(AlreadyRunning)        (no events)
//!   └─ accepted:
//!        strategy.sort(Stepper(seq)) ─► on_compare / on_swap (paced)
//!          ├─ Ok            → on_complete ─► Ok(RunReport)
//!          └─ Err(Canceled) → info, Err(Canceled)           (no on_complete)
//! ```
//!
//! ## Rules
//! - At most **one** run is in flight per orchestrator; the guard is released
//!   on every exit path, including when the caller drops the run future.
//! - Each run gets its **own** cancellation token; [`Orchestrator::cancel`]
//!   only affects the run in flight.
//! - Rejections change nothing and emit nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    core::shuffle::shuffle,
    error::SortError,
    events::Observe,
    items::Sequence,
    policies::Pace,
    strategies::{SortStrategy, Stepper},
};

/// Run state of an orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No sort in flight; new runs are accepted.
    Idle,
    /// A sort is in flight; new runs are rejected.
    Running,
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Name of the strategy that ran.
    pub strategy: &'static str,
    /// Number of compare events emitted.
    pub compares: u64,
    /// Number of swap events emitted.
    pub swaps: u64,
    /// Wall-clock duration of the run, pacing included.
    pub elapsed: Duration,
}

/// Drives sort strategies one run at a time.
pub struct Orchestrator {
    /// Pause awaited after every step.
    pace: Arc<dyn Pace>,
    /// Token of the run in flight; `Some` exactly while `Running`.
    active: Mutex<Option<CancellationToken>>,
}

impl Orchestrator {
    /// Creates an orchestrator paced by `cfg`.
    pub fn new(cfg: &Config) -> Self {
        Self::with_pace(Arc::new(cfg.pacing()))
    }

    /// Creates an orchestrator with a custom pacing implementation.
    pub fn with_pace(pace: Arc<dyn Pace>) -> Self {
        Self {
            pace,
            active: Mutex::new(None),
        }
    }

    /// Returns the current run state.
    pub fn state(&self) -> RunState {
        if self.lock_active().is_some() {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// Returns `true` while a run is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    /// Shuffles `items` with `rng` (Fisher–Yates).
    ///
    /// Not guarded: shuffling while a run is in flight is the caller's concern
    /// (the exclusive borrow of a running sequence already prevents it).
    pub fn shuffle<T, R: Rng + ?Sized>(&self, items: &mut [T], rng: &mut R) {
        shuffle(items, rng);
    }

    /// Cancels the run in flight.
    ///
    /// Returns `true` if a run was signalled. The run stops at its next yield
    /// point, skips `on_complete` and returns [`SortError::Canceled`].
    pub fn cancel(&self) -> bool {
        match self.lock_active().as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Runs `strategy` over `seq`, relaying events to `observer`.
    ///
    /// ### Errors
    /// - [`SortError::MissingStrategy`] when `strategy` is `None`
    /// - [`SortError::AlreadyRunning`] when another run is in flight
    /// - [`SortError::Canceled`] when [`cancel`](Self::cancel) was called mid-run
    pub async fn run_sort(
        &self,
        strategy: Option<&dyn SortStrategy>,
        seq: &mut dyn Sequence,
        observer: &mut dyn Observe,
    ) -> Result<RunReport, SortError> {
        self.run(strategy, seq, observer, CancellationToken::new()).await
    }

    /// Same as [`run_sort`](Self::run_sort), but the run is also cancelled when `parent` is.
    ///
    /// The run uses a child token, so cancelling the run never cancels `parent`.
    pub async fn run_sort_with_token(
        &self,
        strategy: Option<&dyn SortStrategy>,
        seq: &mut dyn Sequence,
        observer: &mut dyn Observe,
        parent: &CancellationToken,
    ) -> Result<RunReport, SortError> {
        self.run(strategy, seq, observer, parent.child_token()).await
    }

    async fn run(
        &self,
        strategy: Option<&dyn SortStrategy>,
        seq: &mut dyn Sequence,
        observer: &mut dyn Observe,
        token: CancellationToken,
    ) -> Result<RunReport, SortError> {
        let Some(strategy) = strategy else {
            warn!("sort rejected: no strategy supplied");
            return Err(SortError::MissingStrategy);
        };
        let _guard = self.try_begin(strategy.name(), &token)?;

        let len = seq.len();
        debug!(strategy = strategy.name(), len, "sort started");
        let started = Instant::now();

        let mut steps = Stepper::new(seq, observer, self.pace.as_ref(), &token);
        let res = strategy.sort(&mut steps).await;
        let (compares, swaps) = (steps.compares(), steps.swaps());
        drop(steps);

        match res {
            Ok(()) => {
                observer.on_complete();
                let report = RunReport {
                    strategy: strategy.name(),
                    compares,
                    swaps,
                    elapsed: started.elapsed(),
                };
                debug!(strategy = report.strategy, compares, swaps, "sort completed");
                Ok(report)
            }
            Err(err) => {
                if matches!(err, SortError::Canceled) {
                    info!(strategy = strategy.name(), compares, swaps, "sort cancelled");
                } else {
                    warn!(strategy = strategy.name(), error = %err, "sort aborted");
                }
                Err(err)
            }
        }
    }

    /// Moves `Idle → Running`, or rejects if a run is already in flight.
    fn try_begin(
        &self,
        strategy: &str,
        token: &CancellationToken,
    ) -> Result<RunGuard<'_>, SortError> {
        let mut active = self.lock_active();
        if active.is_some() {
            warn!(strategy, "sort rejected: a sort is already running");
            return Err(SortError::AlreadyRunning);
        }
        *active = Some(token.clone());
        Ok(RunGuard { owner: self })
    }

    fn lock_active(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Returns the orchestrator to `Idle` when the run ends, however it ends.
struct RunGuard<'a> {
    owner: &'a Orchestrator,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.owner.lock_active().take();
    }
}
