//! Score, lives and best score
//!
//! The engine reads a [`StatsSnapshot`] once per frame and mutates the store
//! through [`StatsStore`] as events happen.

/// Lives at the start of every run
pub const STARTING_LIVES: u32 = 3;

/// Frame-start view of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub score: u64,
    pub lives: u32,
    pub high_score: u64,
}

pub trait StatsStore {
    fn score(&self) -> u64;
    fn lives(&self) -> u32;
    fn high_score(&self) -> u64;

    /// Add points, raising the best score when exceeded
    fn add_score(&mut self, points: u64);
    /// Remove a life, never going below zero
    fn lose_life(&mut self);
    /// Start a new run: score back to zero, lives refilled
    fn reset_score(&mut self);

    /// True when the current run holds the best score
    fn is_new_high_score(&self) -> bool {
        self.score() > 0 && self.score() >= self.high_score()
    }

    fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            score: self.score(),
            lives: self.lives(),
            high_score: self.high_score(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameStats {
    score: u64,
    lives: u32,
    high_score: u64,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameStats {
    /// Fresh run carrying over a previously achieved best score
    pub fn new(high_score: u64) -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            high_score,
        }
    }
}

impl StatsStore for GameStats {
    fn score(&self) -> u64 {
        self.score
    }

    fn lives(&self) -> u32 {
        self.lives
    }

    fn high_score(&self) -> u64 {
        self.high_score
    }

    fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    fn reset_score(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
    }
}
