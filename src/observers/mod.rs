//! # Ready-made observers.
//!
//! - [`Tee`] forwards every notification to two observers, in order.
//! - [`LogWriter`] turns notifications into `tracing` events (feature `logging`).
//!
//! Observers are plain values passed to `run_sort`; combine them with [`Tee`]
//! to drive a presentation layer and a log from the same run.

#[cfg(feature = "logging")]
mod log;
mod tee;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use tee::Tee;
