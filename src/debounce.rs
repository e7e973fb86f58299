use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(1500);

/// Trailing-edge debouncer over a value stream.
///
/// Each new value re-arms the timer, so a burst of updates commits only the
/// last value once input pauses for `delay`. Time is supplied by the caller;
/// [`Debouncer::deadline`] tells an event loop when to call
/// [`Debouncer::poll`].
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    debounced: T,
    latest: T,
    deadline: Option<Instant>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            debounced: initial.clone(),
            latest: initial,
            deadline: None,
        }
    }

    pub fn with_default_delay(initial: T) -> Self {
        Self::new(initial, DEFAULT_DEBOUNCE_DELAY)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn debounced_value(&self) -> &T {
        &self.debounced
    }

    pub fn latest_value(&self) -> &T {
        &self.latest
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Feeds a new value observed at `now`.
    ///
    /// A value equal to the committed one cancels any pending commit.
    pub fn update(&mut self, value: T, now: Instant) {
        if value == self.debounced {
            self.latest = value;
            self.deadline = None;
            return;
        }
        self.latest = value;
        self.deadline = Some(now + self.delay);
    }

    /// Commits the latest value if its timer has expired by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.commit(),
            _ => None,
        }
    }

    /// Cancels the timer and commits the latest value right away.
    pub fn trigger_immediately(&mut self) -> Option<T> {
        if self.deadline.is_none() {
            return None;
        }
        self.commit()
    }

    fn commit(&mut self) -> Option<T> {
        self.deadline = None;
        self.debounced = self.latest.clone();
        Some(self.debounced.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{DEFAULT_DEBOUNCE_DELAY, Debouncer};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn burst_commits_last_value_once_after_pause() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(0, ms(1500));

        debouncer.update(1, start);
        debouncer.update(2, start + ms(500));
        debouncer.update(3, start + ms(1000));
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.deadline(), Some(start + ms(2500)));

        let mut commits = Vec::new();
        for tick in (0..=4000).step_by(100) {
            if let Some(value) = debouncer.poll(start + ms(tick)) {
                commits.push((tick, value));
            }
        }

        assert_eq!(commits, vec![(2500, 3)]);
        assert_eq!(*debouncer.debounced_value(), 3);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn trigger_immediately_flushes_and_cancels_timer() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(0, ms(1500));
        debouncer.update(1, start);
        debouncer.update(2, start + ms(200));
        debouncer.update(3, start + ms(400));

        assert_eq!(debouncer.poll(start + ms(700)), None);
        assert_eq!(debouncer.trigger_immediately(), Some(3));
        assert!(!debouncer.is_pending());

        for tick in (700..=5000).step_by(100) {
            assert_eq!(debouncer.poll(start + ms(tick)), None);
        }
        assert_eq!(debouncer.trigger_immediately(), None);
    }

    #[test]
    fn continuous_stream_defers_commit_indefinitely() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(0u32, ms(1500));

        for step in 1..=200u32 {
            let now = start + ms(u64::from(step) * 1000);
            assert_eq!(debouncer.poll(now), None);
            debouncer.update(step, now);
        }
        assert_eq!(*debouncer.debounced_value(), 0);
        assert_eq!(*debouncer.latest_value(), 200);
        assert_eq!(debouncer.poll(start + ms(201_500)), Some(200));
    }

    #[test]
    fn returning_to_committed_value_cancels_pending_commit() {
        let start = Instant::now();
        let mut debouncer = Debouncer::with_default_delay(String::from("amazing"));
        assert_eq!(debouncer.delay(), DEFAULT_DEBOUNCE_DELAY);

        debouncer.update(String::from("amazing g"), start);
        assert!(debouncer.is_pending());
        debouncer.update(String::from("amazing"), start + ms(100));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + ms(5000)), None);
    }
}
