/// Converts host frame times into whole-millisecond ticks.
///
/// Animations and the observer step in milliseconds. Rather than dropping
/// the fractional part of each frame, the clock carries it over, so a run
/// of 16.666 ms frames still adds up to the true elapsed time.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    remainder_us: u64,
    /// Milliseconds handed out by the last tick.
    pub delta_ms: u64,
    /// Total milliseconds handed out.
    pub elapsed_ms: u64,
    /// Total number of ticks.
    pub frame_count: u64,
    last_frame_us: u64,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a frame that took `delta_us` microseconds and returns the
    /// milliseconds to advance the simulation by.
    pub fn tick(&mut self, delta_us: u64) -> u64 {
        let total = self.remainder_us.saturating_add(delta_us);
        self.delta_ms = total / 1000;
        self.remainder_us = total % 1000;
        self.elapsed_ms = self.elapsed_ms.saturating_add(self.delta_ms);
        self.frame_count += 1;
        self.last_frame_us = delta_us;
        self.delta_ms
    }

    /// Same as [`tick`](Self::tick), from a [`Duration`](std::time::Duration).
    pub fn tick_duration(&mut self, delta: std::time::Duration) -> u64 {
        self.tick(u64::try_from(delta.as_micros()).unwrap_or(u64::MAX))
    }

    /// Microseconds not yet handed out.
    #[must_use]
    pub fn remainder_us(&self) -> u64 {
        self.remainder_us
    }

    /// Instantaneous frame rate of the last tick; 0 before the first tick
    /// or after a zero-length frame.
    #[must_use]
    pub fn fps(&self) -> f32 {
        if self.last_frame_us == 0 {
            0.0
        } else {
            1_000_000.0 / self.last_frame_us as f32
        }
    }
}
