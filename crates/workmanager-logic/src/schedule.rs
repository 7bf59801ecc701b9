//! Recompute scheduling: tick stagger and hour-change debounce.
//!
//! The host calls into the engine every simulation tick. A colony map only
//! recomputes when both hold:
//!
//! 1. its staggered check tick comes around (`(tick + stagger) % 60 == 0`),
//!    so different maps spread their work over different ticks, and
//! 2. the in-game hour differs from the hour of its last run.
//!
//! The stagger is an explicit per-map value rather than anything derived
//! from object identity, so runs are reproducible.

use serde::{Deserialize, Serialize};

/// Ticks between two consecutive schedule checks of one map.
pub const CHECK_PERIOD_TICKS: u64 = 60;

/// Per-map debounce state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecomputeSchedule {
    stagger: u64,
    last_hour: Option<u32>,
}

impl RecomputeSchedule {
    pub fn new(stagger: u64) -> Self {
        Self {
            stagger: stagger % CHECK_PERIOD_TICKS,
            last_hour: None,
        }
    }

    pub fn stagger(&self) -> u64 {
        self.stagger
    }

    /// Hour of the last completed run, `None` before the first.
    pub fn last_hour(&self) -> Option<u32> {
        self.last_hour
    }

    /// Whether this tick is one of the map's check ticks.
    pub fn is_check_tick(&self, tick: u64) -> bool {
        (tick + self.stagger) % CHECK_PERIOD_TICKS == 0
    }

    /// Whether a run should happen at `tick` during in-game `hour`.
    pub fn is_due(&self, tick: u64, hour: u32) -> bool {
        self.is_check_tick(tick) && self.last_hour != Some(hour)
    }

    pub fn mark_ran(&mut self, hour: u32) {
        self.last_hour = Some(hour);
    }

    /// Forget the last run so the next check tick recomputes.
    pub fn reset(&mut self) {
        self.last_hour = None;
    }

    /// Restore a previously saved last-run hour.
    pub fn restore(&mut self, last_hour: Option<u32>) {
        self.last_hour = last_hour;
    }
}
