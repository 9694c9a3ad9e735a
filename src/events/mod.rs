//! Sort events: types and observer plumbing.
//!
//! This module groups the event **data model** and the **observer** contract
//! through which a run reports its steps.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and per-run sequence number
//! - [`Observe`] synchronous notification contract (compare / swap / complete)
//! - [`Callbacks`] observer assembled from optional closures
//! - [`Recorder`] observer that keeps the ordered event log
//!
//! ## Quick reference
//! - **Publisher**: `Stepper` (compare/swap, from inside a strategy) and
//!   `Orchestrator::run_sort` (complete, once per finished run).
//! - **Consumers**: whatever the caller passes to `run_sort`: presentation
//!   callbacks, a [`Recorder`], a `LogWriter`, or `()` when nothing listens.
//!
//! Delivery is synchronous and in emission order; there is no queue between the
//! strategy and the observer.

mod event;
mod observe;
mod recorder;

pub use event::{Event, EventKind};
pub use observe::{Callbacks, Observe};
pub use recorder::Recorder;
