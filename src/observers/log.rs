//! # LogWriter: tracing-backed event logger
//!
//! An observer that turns every notification into a `tracing` event.
//! Use it for demos, or tee it next to a presentation observer while debugging.
//!
//! ## Example output (fmt subscriber)
//! ```text
//! DEBUG sortvisor::observers::log: compare seq=0 a=0 b=1
//! DEBUG sortvisor::observers::log: swap seq=1 a=0 b=1
//! INFO  sortvisor::observers::log: sort complete seq=2 compares=1 swaps=1
//! ```

use tracing::{debug, info};

use crate::events::{EventKind, Observe};

/// Event writer observer.
///
/// Compare and swap events are logged at `debug`, completion at `info` with the
/// totals seen since the writer was created (or last [`reset`](Self::reset)).
#[derive(Debug, Default)]
pub struct LogWriter {
    seq: u64,
    compares: u64,
    swaps: u64,
}

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events logged so far.
    pub fn logged(&self) -> u64 {
        self.seq
    }

    /// Zeroes the counters, e.g. between two runs.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn next(&mut self) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        seq
    }
}

impl Observe for LogWriter {
    fn on_compare(&mut self, a: usize, b: usize) {
        let seq = self.next();
        self.compares += 1;
        debug!(seq, a, b, "{}", EventKind::Compare.as_label());
    }

    fn on_swap(&mut self, a: usize, b: usize) {
        let seq = self.next();
        self.swaps += 1;
        debug!(seq, a, b, "{}", EventKind::Swap.as_label());
    }

    fn on_complete(&mut self) {
        let seq = self.next();
        info!(
            seq,
            compares = self.compares,
            swaps = self.swaps,
            "sort {}",
            EventKind::Complete.as_label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_event() {
        let mut log = LogWriter::new();
        log.on_compare(0, 1);
        log.on_swap(0, 1);
        log.on_compare(1, 2);
        log.on_complete();
        assert_eq!(log.logged(), 4);
        assert_eq!(log.compares, 2);
        assert_eq!(log.swaps, 1);

        log.reset();
        assert_eq!(log.logged(), 0);
    }
}
