use std::time::{Duration, Instant};

use crate::app::domain::stats::{StatField, Stats};
use crate::app::infrastructure::surface::{ElementKey, Surface, SurfaceContext};
use crate::app::services::debounce::Debouncer;

pub const DEFAULT_STATS_DELAY: Duration = Duration::from_millis(250);

/// Keeps the stat displays up to date on its own debounce, independent of
/// the preview render.
pub struct StatsController {
    debounce: Debouncer<()>,
    current: Stats,
}

impl StatsController {
    pub fn new(delay: Duration) -> Self {
        Self {
            debounce: Debouncer::new(delay),
            current: Stats::default(),
        }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.debounce.queue((), now);
    }

    /// Recompute from `content` if the window has elapsed. The text is read at
    /// elapse time, so the result matches the document as it is then.
    pub fn poll<S: Surface>(&mut self, now: Instant, content: &str, ctx: &mut SurfaceContext<S>) -> bool {
        if self.debounce.take_ready(now).is_none() {
            return false;
        }
        self.refresh(content, ctx);
        true
    }

    /// Recompute and display immediately.
    pub fn refresh<S: Surface>(&mut self, content: &str, ctx: &mut SurfaceContext<S>) {
        self.debounce.cancel();
        self.current = Stats::compute(content);
        for field in StatField::all() {
            let text = self.current.display(*field);
            ctx.write(ElementKey::Stat(*field), |s, h| s.set_text(h, &text));
        }
    }

    pub fn stats(&self) -> Stats {
        self.current
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }
}

impl Default for StatsController {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::surface::ElementCache;
    use crate::app::infrastructure::surface::testing::MemorySurface;

    #[test]
    fn test_poll_waits_for_window() {
        let mut stats = StatsController::default();
        let mut surface = MemorySurface::default();
        let mut cache = ElementCache::new();
        let mut ctx = SurfaceContext::new(&mut surface, &mut cache);
        let t0 = Instant::now();

        stats.schedule(t0);
        assert!(!stats.poll(t0 + Duration::from_millis(100), "one two", &mut ctx));
        assert_eq!(stats.stats(), Stats::default());
        assert!(stats.poll(t0 + DEFAULT_STATS_DELAY, "one two", &mut ctx));
        assert_eq!(stats.stats().words, 2);

        assert_eq!(surface.text[&ElementKey::Stat(StatField::Words)], "2 words");
        assert_eq!(surface.text[&ElementKey::Stat(StatField::ReadingTime)], "1 min read");
    }

    #[test]
    fn test_uses_content_at_elapse() {
        let mut stats = StatsController::default();
        let mut surface = MemorySurface::default();
        let mut cache = ElementCache::new();
        let mut ctx = SurfaceContext::new(&mut surface, &mut cache);
        let t0 = Instant::now();

        stats.schedule(t0);
        stats.schedule(t0 + Duration::from_millis(50));
        assert!(stats.poll(t0 + Duration::from_millis(400), "a b c\nd", &mut ctx));
        assert_eq!(stats.stats().words, 4);
        assert_eq!(stats.stats().lines, 2);
        assert!(stats.next_deadline().is_none());
    }

    #[test]
    fn test_refresh_writes_every_field() {
        let mut stats = StatsController::default();
        let mut surface = MemorySurface::default();
        let mut cache = ElementCache::new();
        stats.refresh("", &mut SurfaceContext::new(&mut surface, &mut cache));
        for field in StatField::all() {
            assert!(surface.text.contains_key(&ElementKey::Stat(*field)));
        }
        assert_eq!(surface.text[&ElementKey::Stat(StatField::ReadingTime)], "0 min read");
    }
}
