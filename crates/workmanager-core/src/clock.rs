//! Simulated clock driven by host ticks.

use serde::{Deserialize, Serialize};

/// Simulation ticks in one in-game hour.
pub const TICKS_PER_HOUR: u64 = 2500;
pub const HOURS_PER_DAY: u64 = 24;

/// In-game time counted in ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    ticks: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_tick(ticks: u64) -> Self {
        Self { ticks }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn advance(&mut self, ticks: u64) {
        self.ticks += ticks;
    }

    /// Current hour of day (0-23)
    pub fn hour_of_day(&self) -> u32 {
        ((self.ticks / TICKS_PER_HOUR) % HOURS_PER_DAY) as u32
    }

    /// Whole days elapsed
    pub fn day(&self) -> u64 {
        self.ticks / (TICKS_PER_HOUR * HOURS_PER_DAY)
    }
}
