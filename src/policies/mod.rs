//! Pacing policies.
//!
//! This module groups the knobs that control **how long** the engine pauses
//! after each emitted step so a human observer can follow the animation.
//!
//! ## Contents
//! - [`Pace`]         injectable pause abstraction awaited at every yield point
//! - [`PacingPolicy`] fixed per-step delays (compare / swap), the default [`Pace`]
//! - [`StepKind`]     which kind of step is being paced
//!
//! ## Quick wiring
//! ```text
//! Config { compare_delay, swap_delay }
//!      └─► Config::pacing() ─► PacingPolicy
//!           └─► Orchestrator ─► Stepper::compare / Stepper::swap ─► pace.pause(kind)
//! ```
//!
//! ## Defaults
//! - `PacingPolicy::default()` → compare=20ms, swap=20ms.
//! - `PacingPolicy::immediate()` → no sleep, only `yield_now` (tests).

mod pacing;

pub use pacing::{Pace, PacingPolicy, StepKind};
