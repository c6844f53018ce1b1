/// Frames-per-second readout for the status bar.
///
/// Counts frames and publishes a new rate once at least a second has passed.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    window_start: Option<f64>,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame at `now` (seconds). Returns the current rate.
    pub fn tick(&mut self, now: f64) -> u32 {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let delta = now - start;
        if delta >= 1.0 {
            self.fps = (self.frames as f64 / delta).round() as u32;
            self.frames = 0;
            self.window_start = Some(now);
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
