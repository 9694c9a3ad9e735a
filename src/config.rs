//! # Engine configuration.
//!
//! Provides [`Config`], the centralized settings for sessions and orchestrators.
//!
//! Config is used in two ways:
//! 1. **Orchestrator creation**: `Orchestrator::new(config)` derives the pacing policy
//! 2. **Session creation**: `Session::new(image, config)` also reads the slice count
//!
//! ## Sentinel values
//! - `compare_delay = 0s` → no sleep after a comparison, only a cooperative yield
//! - `swap_delay = 0s` → no sleep after a swap, only a cooperative yield

use std::time::Duration;

use crate::policies::PacingPolicy;

/// Default pause after each step, matching a comfortable animation pace.
const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(20);

/// Default number of slices an image is cut into.
const DEFAULT_SLICE_COUNT: usize = 50;

/// Configuration for the sorting engine.
///
/// ## Field semantics
/// - `compare_delay`: pause after every compare event (`0s` = yield only)
/// - `swap_delay`: pause after every swap event (`0s` = yield only)
/// - `slice_count`: how many slices a session cuts its image into
///
/// ## Notes
/// Delays are presentation pacing only; they never influence the event order or
/// the final arrangement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Pause after a comparison has been announced.
    pub compare_delay: Duration,

    /// Pause after a swap has been committed and announced.
    pub swap_delay: Duration,

    /// Number of slices produced by [`Session::slice`](crate::Session::slice).
    pub slice_count: usize,
}

impl Config {
    /// Returns a configuration without any pacing delay.
    ///
    /// Used by tests and by callers that drive the engine headless.
    pub fn immediate() -> Self {
        Self {
            compare_delay: Duration::ZERO,
            swap_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Builds the pacing policy described by this configuration.
    #[inline]
    pub fn pacing(&self) -> PacingPolicy {
        PacingPolicy {
            compare: self.compare_delay,
            swap: self.swap_delay,
        }
    }

    /// Returns `true` if no step is ever delayed.
    #[inline]
    pub fn is_immediate(&self) -> bool {
        self.compare_delay.is_zero() && self.swap_delay.is_zero()
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `compare_delay = 20ms`
    /// - `swap_delay = 20ms`
    /// - `slice_count = 50`
    fn default() -> Self {
        Self {
            compare_delay: DEFAULT_STEP_DELAY,
            swap_delay: DEFAULT_STEP_DELAY,
            slice_count: DEFAULT_SLICE_COUNT,
        }
    }
}
