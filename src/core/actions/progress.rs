use std::sync::Mutex;

/// Receives percent-complete updates from a running render.
///
/// Purely informational; implementations must not influence the result.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn report(&self, _percent: u8) {}
}

impl<F> ProgressSink for F
where
    F: Fn(u8) + Send + Sync,
{
    fn report(&self, percent: u8) {
        self(percent)
    }
}

/// Turns completed-unit counts from many threads into a non-decreasing
/// stream of whole percentages, each reported at most once.
pub struct ProgressTracker<'a, P: ProgressSink + ?Sized> {
    sink: &'a P,
    total: usize,
    // (completed units, last percent reported)
    state: Mutex<(usize, u8)>,
}

impl<'a, P: ProgressSink + ?Sized> ProgressTracker<'a, P> {
    pub fn new(sink: &'a P, total: usize) -> Self {
        Self {
            sink,
            total,
            state: Mutex::new((0, 0)),
        }
    }

    pub fn complete_units(&self, units: usize) {
        if self.total == 0 {
            return;
        }

        // counters stay usable after a panic elsewhere
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        guard.0 = (guard.0 + units).min(self.total);
        let percent = (guard.0 * 100 / self.total) as u8;

        // reported under the lock so callers never observe a decrease
        if percent > guard.1 {
            guard.1 = percent;
            self.sink.report(percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_reports_each_percentage_once() {
        let seen = Mutex::new(Vec::new());
        let sink = |percent: u8| seen.lock().unwrap().push(percent);
        let tracker = ProgressTracker::new(&sink, 4);

        for _ in 0..4 {
            tracker.complete_units(1);
        }

        assert_eq!(*seen.lock().unwrap(), vec![25, 50, 75, 100]);
    }

    #[test]
    fn test_skips_reports_that_do_not_advance() {
        let seen = Mutex::new(Vec::new());
        let sink = |percent: u8| seen.lock().unwrap().push(percent);
        let tracker = ProgressTracker::new(&sink, 300);

        tracker.complete_units(1);
        tracker.complete_units(1);
        tracker.complete_units(1);

        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_parallel_reports_are_monotonic_and_finish_at_100() {
        let seen = Mutex::new(Vec::new());
        let sink = |percent: u8| seen.lock().unwrap().push(percent);
        let tracker = ProgressTracker::new(&sink, 1000);

        (0..1000).into_par_iter().for_each(|_| tracker.complete_units(1));

        let seen = seen.into_inner().unwrap();
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(seen.last(), Some(&100));
    }

    #[test]
    fn test_no_progress_is_silent() {
        let tracker = ProgressTracker::new(&NoProgress, 10);
        tracker.complete_units(10);
    }
}
