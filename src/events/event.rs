//! # Events emitted during a sort run.
//!
//! The [`EventKind`] enum classifies the three notifications a run produces:
//! - **Compare**: two positions are about to be evaluated
//! - **Swap**: two positions were exchanged
//! - **Complete**: the strategy finished (never emitted for rejected or cancelled runs)
//!
//! ## Ordering guarantees
//! Events carry a `seq` assigned by the recording observer. Within one run it
//! increases by one per event, so a gap or reorder in a recorded log is a bug.
//!
//! ## Example
//! ```rust
//! use sortvisor::{Event, EventKind};
//!
//! let ev = Event::swap(7, 0, 1);
//! assert_eq!(ev.kind, EventKind::Swap);
//! assert_eq!(ev.pair, Some((0, 1)));
//! ```

/// Classification of sort events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Two positions are being compared.
    ///
    /// Sets:
    /// - `pair`: `(a, b)` in the order the algorithm evaluates them
    /// - `seq`: position in the run's event stream
    Compare,

    /// Two positions were exchanged.
    ///
    /// Sets:
    /// - `pair`: `(a, b)` as reported by the algorithm
    /// - `seq`: position in the run's event stream
    Swap,

    /// The strategy ran to completion.
    ///
    /// Sets:
    /// - `seq`: position in the run's event stream
    Complete,
}

impl EventKind {
    /// Returns a short stable label for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::Compare => "compare",
            EventKind::Swap => "swap",
            EventKind::Complete => "complete",
        }
    }
}

/// Recorded sort event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Monotonic position within the recorded stream.
    pub seq: u64,
    /// Event classification.
    pub kind: EventKind,
    /// Positions involved (`None` for [`EventKind::Complete`]).
    pub pair: Option<(usize, usize)>,
}

impl Event {
    /// Creates a compare event.
    #[inline]
    pub fn compare(seq: u64, a: usize, b: usize) -> Self {
        Self {
            seq,
            kind: EventKind::Compare,
            pair: Some((a, b)),
        }
    }

    /// Creates a swap event.
    #[inline]
    pub fn swap(seq: u64, a: usize, b: usize) -> Self {
        Self {
            seq,
            kind: EventKind::Swap,
            pair: Some((a, b)),
        }
    }

    /// Creates a completion event.
    #[inline]
    pub fn complete(seq: u64) -> Self {
        Self {
            seq,
            kind: EventKind::Complete,
            pair: None,
        }
    }

    /// Returns `true` for a compare event.
    #[inline]
    pub fn is_compare(&self) -> bool {
        matches!(self.kind, EventKind::Compare)
    }

    /// Returns `true` for a swap event.
    #[inline]
    pub fn is_swap(&self) -> bool {
        matches!(self.kind, EventKind::Swap)
    }
}
