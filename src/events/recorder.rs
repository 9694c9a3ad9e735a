//! # Recording observer.
//!
//! [`Recorder`] appends every notification to an ordered log, numbering events
//! from zero. Tests use it to assert exact compare/swap sequences; a
//! presentation layer can use it to replay a run at its own pace.

use crate::events::{Event, EventKind, Observe};

/// Observer that keeps every event in emission order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All recorded events, in order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Pairs of all compare events, in order.
    pub fn compares(&self) -> Vec<(usize, usize)> {
        self.pairs(EventKind::Compare)
    }

    /// Pairs of all swap events, in order.
    pub fn swaps(&self) -> Vec<(usize, usize)> {
        self.pairs(EventKind::Swap)
    }

    /// Number of completion events seen.
    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Complete)
            .count()
    }

    /// Returns `true` if the run reported completion.
    pub fn completed(&self) -> bool {
        self.completions() > 0
    }

    /// Drops all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn pairs(&self, kind: EventKind) -> Vec<(usize, usize)> {
        self.events
            .iter()
            .filter(|e| e.kind == kind)
            .filter_map(|e| e.pair)
            .collect()
    }

    fn next_seq(&self) -> u64 {
        self.events.len() as u64
    }
}

impl Observe for Recorder {
    fn on_compare(&mut self, a: usize, b: usize) {
        let ev = Event::compare(self.next_seq(), a, b);
        self.events.push(ev);
    }

    fn on_swap(&mut self, a: usize, b: usize) {
        let ev = Event::swap(self.next_seq(), a, b);
        self.events.push(ev);
    }

    fn on_complete(&mut self) {
        let ev = Event::complete(self.next_seq());
        self.events.push(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let mut rec = Recorder::new();
        rec.on_compare(0, 1);
        rec.on_swap(0, 1);
        rec.on_complete();

        let seqs: Vec<u64> = rec.events().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(rec.compares(), vec![(0, 1)]);
        assert_eq!(rec.swaps(), vec![(0, 1)]);
        assert!(rec.completed());
    }

    #[test]
    fn test_clear() {
        let mut rec = Recorder::new();
        rec.on_compare(1, 2);
        rec.clear();
        assert!(rec.events().is_empty());
        assert!(!rec.completed());
    }
}
