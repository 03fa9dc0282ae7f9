use std::time::{Duration, Instant};

/// Single-slot debounce: each `queue` replaces the pending value and restarts
/// the quiet window. The caller supplies the clock, so the host decides how it
/// gets woken up (FLTK timeout, event-loop poll, or a test stepping time).
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Supersede whatever is pending and start a new window at `now`.
    pub fn queue(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value once its window has elapsed.
    pub fn take_ready(&mut self, now: Instant) -> Option<T> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// When the pending value becomes ready, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|(_, queued_at)| *queued_at + self.delay)
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_waits_for_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.queue("a", t0);

        assert!(debouncer.take_ready(t0 + ms(299)).is_none());
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.take_ready(t0 + ms(300)), Some("a"));
        assert!(!debouncer.is_pending());
        assert!(debouncer.take_ready(t0 + ms(900)).is_none());
    }

    #[test]
    fn test_uses_latest_value_and_restarts_window() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.queue(1, t0);
        debouncer.queue(2, t0 + ms(200));

        // The first window would have elapsed here, but it was superseded
        assert!(debouncer.take_ready(t0 + ms(300)).is_none());
        assert_eq!(debouncer.deadline(), Some(t0 + ms(500)));
        assert_eq!(debouncer.take_ready(t0 + ms(500)), Some(2));
    }

    #[test]
    fn test_continuous_input_starves() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        for i in 0..20u64 {
            let now = t0 + ms(i * 100);
            debouncer.queue(i, now);
            assert!(debouncer.take_ready(now + ms(50)).is_none());
        }
        assert_eq!(debouncer.take_ready(t0 + ms(1900 + 300)), Some(19));
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(10));
        debouncer.queue("x", t0);
        assert_eq!(debouncer.cancel(), Some("x"));
        assert_eq!(debouncer.deadline(), None);
        assert!(debouncer.take_ready(t0 + ms(10)).is_none());
    }
}
