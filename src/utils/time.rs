use std::time::{Duration, Instant};

/// Wall-clock frame timer. The dance is sampled from [`Timer::elapsed`].
pub struct Timer {
    start_time: Instant,
    /// Total elapsed time since creation. Never goes backwards.
    pub elapsed: Duration,
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start_time: start,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advances to `now`. Instants earlier than the last tick leave
    /// `elapsed` unchanged.
    pub fn tick_at(&mut self, now: Instant) {
        self.elapsed = self.elapsed.max(now.saturating_duration_since(self.start_time));
        self.frame_count += 1;
    }
}
