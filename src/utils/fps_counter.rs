/// Frame rate averaged over one-second windows.
pub struct FpsCounter {
    frame_count: u32,
    accumulated_ms: u64,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            accumulated_ms: 0,
            current_fps: 0.0,
        }
    }

    /// Counts a frame of `delta_ms`; returns the new average once a full
    /// second has accumulated.
    pub fn update(&mut self, delta_ms: u64) -> Option<f32> {
        self.frame_count += 1;
        self.accumulated_ms += delta_ms;

        if self.accumulated_ms >= 1000 {
            self.current_fps = self.frame_count as f32 * 1000.0 / self.accumulated_ms as f32;

            self.accumulated_ms = 0;
            self.frame_count = 0;

            return Some(self.current_fps);
        }

        None
    }
}
