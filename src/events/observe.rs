//! # Observer contract.
//!
//! Provides [`Observe`], the hook a presentation layer implements to follow a
//! run, and [`Callbacks`], an observer built from plain closures.
//!
//! ## Rules
//! - Calls are synchronous and made from the sorting task itself.
//! - `on_compare` comes **before** the comparison is acted on.
//! - `on_swap` comes **after** the exchange is committed to the sequence.
//! - `on_complete` comes once, after the last step of a successful run.
//! - Every method defaults to a no-op, so an absent callback is never an error.
//!
//! ## Example
//! ```rust
//! use sortvisor::{Callbacks, Observe};
//!
//! let mut swaps = 0;
//! {
//!     let mut cb = Callbacks::new().with_swap(|_a, _b| swaps += 1);
//!     cb.on_compare(0, 1); // no compare callback set: ignored
//!     cb.on_swap(0, 1);
//! }
//! assert_eq!(swaps, 1);
//! ```

/// Receives compare/swap/complete notifications from a run.
///
/// ### Implementation requirements
/// - Return quickly: the run is suspended while a callback executes.
/// - Do not panic; a panic unwinds through the sorting task.
pub trait Observe: Send {
    /// Positions `a` and `b` are about to be compared.
    fn on_compare(&mut self, _a: usize, _b: usize) {}

    /// Positions `a` and `b` have just been exchanged.
    fn on_swap(&mut self, _a: usize, _b: usize) {}

    /// The run finished successfully.
    fn on_complete(&mut self) {}
}

/// Observer that ignores everything.
impl Observe for () {}

impl<O: Observe + ?Sized> Observe for &mut O {
    fn on_compare(&mut self, a: usize, b: usize) {
        (**self).on_compare(a, b);
    }

    fn on_swap(&mut self, a: usize, b: usize) {
        (**self).on_swap(a, b);
    }

    fn on_complete(&mut self) {
        (**self).on_complete();
    }
}

type PairFn<'a> = Box<dyn FnMut(usize, usize) + Send + 'a>;
type DoneFn<'a> = Box<dyn FnMut() + Send + 'a>;

/// Observer assembled from optional closures.
///
/// Unset callbacks are skipped.
#[derive(Default)]
pub struct Callbacks<'a> {
    compare: Option<PairFn<'a>>,
    swap: Option<PairFn<'a>>,
    complete: Option<DoneFn<'a>>,
}

impl<'a> Callbacks<'a> {
    /// Creates an observer with no callbacks set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            compare: None,
            swap: None,
            complete: None,
        }
    }

    /// Sets the compare callback.
    #[must_use]
    pub fn with_compare(mut self, f: impl FnMut(usize, usize) + Send + 'a) -> Self {
        self.compare = Some(Box::new(f));
        self
    }

    /// Sets the swap callback.
    #[must_use]
    pub fn with_swap(mut self, f: impl FnMut(usize, usize) + Send + 'a) -> Self {
        self.swap = Some(Box::new(f));
        self
    }

    /// Sets the completion callback.
    #[must_use]
    pub fn with_complete(mut self, f: impl FnMut() + Send + 'a) -> Self {
        self.complete = Some(Box::new(f));
        self
    }
}

impl Observe for Callbacks<'_> {
    fn on_compare(&mut self, a: usize, b: usize) {
        if let Some(f) = self.compare.as_mut() {
            f(a, b);
        }
    }

    fn on_swap(&mut self, a: usize, b: usize) {
        if let Some(f) = self.swap.as_mut() {
            f(a, b);
        }
    }

    fn on_complete(&mut self) {
        if let Some(f) = self.complete.as_mut() {
            f();
        }
    }
}
