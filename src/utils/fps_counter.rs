use std::time::{Duration, Instant};

/// Averages the frame rate over one-second windows.
pub struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
    accumulated_time: Duration,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    const WINDOW: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
            accumulated_time: Duration::ZERO,
            current_fps: 0.0,
        }
    }

    /// Counts one frame. Returns the new average once per window.
    pub fn update(&mut self) -> Option<f32> {
        let now = Instant::now();
        let delta = now - self.last_update;
        self.last_update = now;
        self.record(delta)
    }

    /// Counts one frame that took `delta`.
    pub fn record(&mut self, delta: Duration) -> Option<f32> {
        self.frame_count += 1;
        self.accumulated_time += delta;

        if self.accumulated_time < Self::WINDOW {
            return None;
        }

        self.current_fps = self.frame_count as f32 / self.accumulated_time.as_secs_f32();
        self.accumulated_time = Duration::ZERO;
        self.frame_count = 0;
        Some(self.current_fps)
    }
}
