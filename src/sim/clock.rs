//! Host timestamp → frame delta conversion

use crate::consts::MAX_FRAME_DT_MS;

/// Turns the host's frame timestamps into clamped per-frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call; the first call yields zero
    pub fn tick(&mut self, time_ms: f64) -> f32 {
        let dt = match self.last_time_ms {
            Some(last) => (time_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);
        dt.min(MAX_FRAME_DT_MS)
    }

    /// Forget the previous timestamp (after a pause or restart)
    pub fn reset(&mut self) {
        self.last_time_ms = None;
    }
}
