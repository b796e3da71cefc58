//! Game clock and search limits.
//!
//! The clock keeps one countdown per color; at most one of them runs at a
//! time. Running out of time is reported, never enforced here.
//!
//! Every method that reads the wall clock has an `*_at(Instant)` twin so
//! callers (and tests) can supply the reading themselves.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Bounds on the beam search. Both must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Plies to look ahead.
    pub depth: u8,
    /// Candidates kept per ply.
    pub width: usize,
}

impl SearchLimits {
    pub fn new(depth: u8, width: usize) -> Self {
        Self {
            depth: depth.max(1),
            width: width.max(1),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new(3, 5)
    }
}

/// Two countdown timers keyed by color.
#[derive(Debug, Clone)]
pub struct GameClock {
    remaining: [Duration; 2],
    /// The running timer and when it last started or was charged.
    running: Option<(Color, Instant)>,
}

impl GameClock {
    /// Both sides start with `budget`; nothing is running.
    pub fn new(budget: Duration) -> Self {
        Self {
            remaining: [budget; 2],
            running: None,
        }
    }

    pub fn running(&self) -> Option<Color> {
        self.running.map(|(c, _)| c)
    }

    /// Stop the running timer, charging it for the time since it started,
    /// then start `next`. `None` stops timing altogether.
    pub fn switch_to(&mut self, next: Option<Color>) {
        self.switch_to_at(next, Instant::now());
    }

    pub fn switch_to_at(&mut self, next: Option<Color>, now: Instant) {
        if let Some((color, since)) = self.running.take() {
            let spent = now.saturating_duration_since(since);
            let slot = &mut self.remaining[color.idx()];
            *slot = slot.saturating_sub(spent);
        }
        self.running = next.map(|c| (c, now));
    }

    /// Time left for `color`, including the live reduction if its timer is
    /// running. Never negative.
    pub fn remaining(&self, color: Color) -> Duration {
        self.remaining_at(color, Instant::now())
    }

    pub fn remaining_at(&self, color: Color, now: Instant) -> Duration {
        let stored = self.remaining[color.idx()];
        match self.running {
            Some((c, since)) if c == color => {
                stored.saturating_sub(now.saturating_duration_since(since))
            }
            _ => stored,
        }
    }

    pub fn is_expired(&self, color: Color) -> bool {
        self.is_expired_at(color, Instant::now())
    }

    pub fn is_expired_at(&self, color: Color, now: Instant) -> bool {
        self.remaining_at(color, now).is_zero()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
