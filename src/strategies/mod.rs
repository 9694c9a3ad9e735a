//! # Sort strategies.
//!
//! This module provides the pluggable algorithm layer:
//! - [`SortStrategy`] - trait every algorithm implements (one async `sort` entry point)
//! - [`Stepper`] - emits compare/swap events, paces, and checks cancellation
//! - [`BubbleSort`], [`QuickSort`] - the two built-in strategies
//! - [`StrategyKind`] - name-based selection of a built-in strategy
//!
//! ## Architecture
//! ```text
//! Orchestrator::run_sort(strategy, seq, observer)
//!     └─► strategy.sort(&mut Stepper { seq, observer, pace, token })
//!             ├─► stepper.compare(a, b) ─► on_compare ─► pace ─► Ordering
//!             └─► stepper.swap(a, b)    ─► seq.swap ─► on_swap ─► pace
//! ```
//!
//! The stepper owns the run's borrow of the sequence and strategies never see
//! it directly, so every comparison and swap is part of the event stream.

mod bubble;
mod kind;
mod quick;
mod stepper;
mod strategy;

pub use bubble::BubbleSort;
pub use kind::{StrategyKind, UnknownStrategy};
pub use quick::QuickSort;
pub use stepper::Stepper;
pub use strategy::{SortStrategy, StrategyRef};
