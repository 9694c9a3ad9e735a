//! # Session: slice, shuffle and sort one image.
//!
//! A [`Session`] is the headless counterpart of an interactive sorting screen.
//! It owns the source image, the current slices and an [`Orchestrator`], and
//! enforces the rules a presentation layer would otherwise have to remember:
//!
//! ```text
//! slice() / reset()  ──► items = slice(image, cfg.slice_count)   (0..N in order)
//! shuffle(rng)       ──► Fisher–Yates on items                    (no events)
//! sort(strategy, o)  ──► orchestrator.run_sort(strategy, items, o)
//! cancel()           ──► orchestrator.cancel()
//! ```
//!
//! ## Rules
//! - While a sort is in flight, `slice`, `reset`, `shuffle`, `snapshot` and a
//!   second `sort` are rejected with [`SortError::AlreadyRunning`]; they never wait.
//! - Before the first successful `slice`, `shuffle` and `sort` fail with
//!   [`SortError::EmptySequence`].
//! - Items are guarded by an async mutex held for the whole run, so no other
//!   writer can touch them until the run ends.

use std::sync::Arc;

use rand::Rng;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::{
    config::Config,
    core::orchestrator::{Orchestrator, RunReport},
    core::shuffle::shuffle,
    error::SortError,
    events::Observe,
    items::{Raster, Slice, SortItem, slice},
    strategies::SortStrategy,
};

/// Items produced by slicing an image of type `I`.
pub type SliceItems<I> = Vec<SortItem<usize, Slice<I>>>;

/// One image, its slices, and the orchestrator sorting them.
pub struct Session<I> {
    image: Option<Arc<I>>,
    cfg: Config,
    orchestrator: Orchestrator,
    items: Mutex<Option<SliceItems<I>>>,
}

impl<I: Raster> Session<I> {
    /// Creates a session; nothing is sliced until [`slice`](Self::slice) is called.
    pub fn new(image: Option<Arc<I>>, cfg: Config) -> Self {
        let orchestrator = Orchestrator::new(&cfg);
        Self {
            image,
            cfg,
            orchestrator,
            items: Mutex::new(None),
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Returns the orchestrator driving this session's runs.
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Cuts the image into `cfg.slice_count` ordered slices, replacing any current items.
    ///
    /// Returns the number of slices.
    pub fn slice(&self) -> Result<usize, SortError> {
        let mut items = self.try_items("slice")?;
        let count = i64::try_from(self.cfg.slice_count).unwrap_or(i64::MAX);
        let fresh = slice(self.image.clone(), count)?;
        let n = fresh.len();
        *items = Some(fresh);
        Ok(n)
    }

    /// Restores the original order by slicing again.
    pub fn reset(&self) -> Result<usize, SortError> {
        self.slice()
    }

    /// Shuffles the current slices with `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(), SortError> {
        let mut items = self.try_items("shuffle")?;
        match items.as_mut() {
            Some(items) if !items.is_empty() => {
                shuffle(items, rng);
                debug!(len = items.len(), "slices shuffled");
                Ok(())
            }
            _ => {
                warn!("shuffle rejected: nothing to shuffle; slice first");
                Err(SortError::EmptySequence)
            }
        }
    }

    /// Sorts the current slices with `strategy`, reporting to `observer`.
    pub async fn sort(
        &self,
        strategy: Option<&dyn SortStrategy>,
        observer: &mut dyn Observe,
    ) -> Result<RunReport, SortError> {
        let mut items = self.try_items("sort")?;
        let Some(items) = items.as_mut() else {
            warn!("sort rejected: nothing to sort; slice first");
            return Err(SortError::EmptySequence);
        };
        self.orchestrator.run_sort(strategy, items, observer).await
    }

    /// Cancels the sort in flight, if any.
    pub fn cancel(&self) -> bool {
        self.orchestrator.cancel()
    }

    /// Returns the current key order (empty before the first slice).
    pub fn snapshot_values(&self) -> Result<Vec<usize>, SortError> {
        let items = self.try_items("snapshot_values")?;
        Ok(items
            .as_ref()
            .map(|items| items.iter().map(|it| *it.value()).collect())
            .unwrap_or_default())
    }

    /// Returns a copy of the current items (payloads are shared, not cloned).
    pub fn snapshot(&self) -> Result<SliceItems<I>, SortError> {
        let items = self.try_items("snapshot")?;
        Ok(items.as_ref().cloned().unwrap_or_default())
    }

    /// Locks the items without waiting; a held lock means a sort is in flight.
    fn try_items(
        &self,
        op: &'static str,
    ) -> Result<MutexGuard<'_, Option<SliceItems<I>>>, SortError> {
        if self.orchestrator.is_running() {
            warn!(op, "rejected: a sort is running");
            return Err(SortError::AlreadyRunning);
        }
        self.items.try_lock().map_err(|_| {
            warn!(op, "rejected: slices are locked by a running sort");
            SortError::AlreadyRunning
        })
    }
}
