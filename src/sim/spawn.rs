//! Enemy spawn cadence and difficulty ramp

use crate::consts::{BASE_SPAWN_INTERVAL_MS, MIN_SPAWN_INTERVAL_MS, SPAWN_INTERVAL_STEP_MS};

/// Spawn interval for a score: 50 ms faster per full 100 points, floored at 500 ms
pub fn spawn_interval_ms(score: u64) -> f64 {
    let steps = (score / 100) as f64;
    (BASE_SPAWN_INTERVAL_MS - steps * SPAWN_INTERVAL_STEP_MS).max(MIN_SPAWN_INTERVAL_MS)
}

#[derive(Debug, Clone)]
pub struct SpawnController {
    /// `None` until the first spawn, which then happens immediately
    last_spawn_ms: Option<f64>,
    interval_ms: f64,
}

impl Default for SpawnController {
    fn default() -> Self {
        Self {
            last_spawn_ms: None,
            interval_ms: BASE_SPAWN_INTERVAL_MS,
        }
    }
}

impl SpawnController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Recompute the interval from this frame's score and report whether a
    /// spawn is due; a due spawn resets the timer to `now_ms`.
    pub fn poll(&mut self, now_ms: f64, score: u64) -> bool {
        self.interval_ms = spawn_interval_ms(score);
        let due = match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms,
        };
        if due {
            self.last_spawn_ms = Some(now_ms);
        }
        due
    }
}
