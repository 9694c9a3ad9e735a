use crate::events::Observe;

/// Observer that fans every notification out to `first`, then `second`.
///
/// # Example
/// ```rust
/// use sortvisor::{Observe, Recorder, Tee};
///
/// let mut tee = Tee::new(Recorder::new(), Recorder::new());
/// tee.on_swap(0, 1);
/// let (a, b) = tee.into_inner();
/// assert_eq!(a.swaps(), b.swaps());
/// ```
#[derive(Debug, Default)]
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: Observe, B: Observe> Tee<A, B> {
    /// Combines two observers.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns both observers back.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Observe, B: Observe> Observe for Tee<A, B> {
    fn on_compare(&mut self, a: usize, b: usize) {
        self.first.on_compare(a, b);
        self.second.on_compare(a, b);
    }

    fn on_swap(&mut self, a: usize, b: usize) {
        self.first.on_swap(a, b);
        self.second.on_swap(a, b);
    }

    fn on_complete(&mut self) {
        self.first.on_complete();
        self.second.on_complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Callbacks, EventKind, Recorder};

    #[test]
    fn test_both_sides_see_same_stream() {
        let mut tee = Tee::new(Recorder::new(), Recorder::new());
        tee.on_compare(0, 1);
        tee.on_swap(0, 1);
        tee.on_complete();

        let (a, b) = tee.into_inner();
        assert_eq!(a.events(), b.events());
        let kinds: Vec<EventKind> = a.events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Compare, EventKind::Swap, EventKind::Complete]
        );
    }

    #[test]
    fn test_first_is_called_before_second() {
        let mut order = Vec::new();
        {
            let log = std::sync::Mutex::new(&mut order);
            let first = Callbacks::new().with_swap(|_, _| log.lock().unwrap().push("first"));
            let second = Callbacks::new().with_swap(|_, _| log.lock().unwrap().push("second"));
            let mut tee = Tee::new(first, second);
            tee.on_swap(2, 3);
        }
        assert_eq!(order, vec!["first", "second"]);
    }
}
