//! # sortvisor
//!
//! **Sortvisor** is an observable sorting engine for animated sort demos.
//!
//! An image is cut into ordered slices, the slices are shuffled, and a chosen
//! strategy sorts them back while reporting every comparison and swap. Each
//! step is paced by an injectable policy so a presentation layer can animate
//! it, and a run can be cancelled at any step.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   image ──► slice(image, N) ──► Vec<SortItem<usize, Slice>>   (values 0..N)
//!                                         │
//!                                 shuffle(items, rng)            (no events)
//!                                         │
//!                                         ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Orchestrator (one run at a time)                                 │
//! │  - RunState (Idle / Running, released on every exit path)         │
//! │  - CancellationToken (fresh per run, optional parent)             │
//! │  - Pace (PacingPolicy: compare_delay / swap_delay)                │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼
//!                  ┌──────────────────────────┐
//!                  │  SortStrategy::sort()    │   BubbleSort, QuickSort, ...
//!                  │   steps.compare(a, b)    │
//!                  │   steps.swap(a, b)       │
//!                  └────────────┬─────────────┘
//!                               ▼
//!                  ┌──────────────────────────┐
//!                  │  Stepper                 │
//!                  │  1. cancelled? → Err     │
//!                  │  2. notify observer      │
//!                  │  3. pause (cancellable)  │
//!                  └────────────┬─────────────┘
//!                               ▼
//!                  Observe: on_compare / on_swap / on_complete
//!                  (Callbacks, Recorder, LogWriter, Tee, ...)
//! ```
//!
//! ### Lifecycle
//! ```text
//! run_sort(strategy, seq, observer)
//!   ├─► strategy is None      ─► warn, Err(MissingStrategy)
//!   ├─► already Running       ─► warn, Err(AlreadyRunning)
//!   └─► Running
//!         ├─ strategy Ok      ─► on_complete (once) ─► Ok(RunReport) ─► Idle
//!         ├─ cancel()         ─► Err(Canceled), no on_complete        ─► Idle
//!         └─ future dropped   ─────────────────────────────────────────► Idle
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                        |
//! |-------------------|---------------------------------------------------------------|-------------------------------------------|
//! | **Strategies**    | Pluggable algorithms reporting through a stepper.             | [`SortStrategy`], [`Stepper`], [`StrategyKind`] |
//! | **Orchestration** | Single-run admission, pacing, cancellation, completion.       | [`Orchestrator`], [`RunReport`]           |
//! | **Sessions**      | Image, slices and orchestrator behind one lock.               | [`Session`]                               |
//! | **Observers**     | Synchronous compare/swap/complete notifications.              | [`Observe`], [`Callbacks`], [`Recorder`]  |
//! | **Items**         | Keyed payloads and the mutable sequence abstraction.          | [`SortItem`], [`Sequence`], [`slice()`]   |
//! | **Policies**      | Per-step pacing.                                              | [`Pace`], [`PacingPolicy`]                |
//! | **Errors**        | Typed, non-fatal errors.                                      | [`SortError`]                             |
//! | **Configuration** | Delays and slice count.                                       | [`Config`]                                |
//!
//! ## Optional features
//! - `logging`: exports a [`tracing`]-backed `LogWriter` observer _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use sortvisor::{Config, Orchestrator, Recorder, SortItem, StrategyKind};
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), sortvisor::SortError> {
//!     let orchestrator = Orchestrator::new(&Config::immediate());
//!
//!     let mut items: Vec<SortItem<u32, &str>> = (0..8)
//!         .map(|v| SortItem::new(v, Arc::new("strip")))
//!         .collect();
//!     orchestrator.shuffle(&mut items, &mut StdRng::seed_from_u64(7));
//!
//!     let strategy = StrategyKind::Quick.strategy();
//!     let mut recorder = Recorder::new();
//!     let report = orchestrator
//!         .run_sort(Some(strategy.as_ref()), &mut items, &mut recorder)
//!         .await?;
//!
//!     assert!(recorder.completed());
//!     assert_eq!(report.swaps, recorder.swaps().len() as u64);
//!     assert!(items.windows(2).all(|w| w[0].value() <= w[1].value()));
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

mod config;
mod core;
mod error;
mod events;
mod items;
mod observers;
mod policies;
mod strategies;

#[cfg(test)]
mod test_support;

// ---- Public re-exports ----

pub use config::Config;
pub use core::{Orchestrator, RunReport, RunState, Session, SliceItems, shuffle};
pub use error::SortError;
pub use events::{Callbacks, Event, EventKind, Observe, Recorder};
pub use items::{Raster, Rect, Sequence, Slice, SortItem, slice};
pub use observers::Tee;
pub use policies::{Pace, PacingPolicy, StepKind};
pub use strategies::{
    BubbleSort, QuickSort, SortStrategy, Stepper, StrategyKind, StrategyRef, UnknownStrategy,
};

// Optional: expose a tracing-backed logger observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
