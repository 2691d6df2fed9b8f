//! Build-time simulation constants.

use std::time::Duration;

/// Number of hunters the binary asks for.
pub const HUNTER_COUNT: usize = 4;
/// Fear level at which a hunter flees.
pub const FEAR_CEILING: u32 = 100;
/// Fear gained per tick spent with the ghost.
pub const FEAR_RATE: u32 = 1;
/// Ticks an agent tolerates without a stimulus.
pub const BOREDOM_CEILING: u32 = 99;
/// Distinct supernatural kinds a hunter needs to win.
pub const WIN_THRESHOLD: usize = 3;
/// Chance the ghost leaves evidence on a tick it shares a room with a hunter.
pub const GHOST_EVIDENCE_CHANCE: f64 = 0.5;

/// Bounds for the randomized pause between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickDelay {
    pub min: Duration,
    pub max: Duration,
}

impl TickDelay {
    pub const fn from_millis(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    /// No pause at all.
    pub const fn none() -> Self {
        Self::from_millis(0, 0)
    }

    /// Pick a duration inside the bounds for a sample `t` in `[0, 1)`.
    pub fn at(&self, t: f64) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let span = self.max - self.min;
        self.min + span.mul_f64(t.clamp(0.0, 1.0))
    }
}

/// Every tunable of a round, fixed when the crate is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub hunter_count: usize,
    pub fear_ceiling: u32,
    pub fear_rate: u32,
    pub boredom_ceiling: u32,
    pub win_threshold: usize,
    pub ghost_evidence_chance: f64,
    pub hunter_tick: TickDelay,
    pub ghost_tick: TickDelay,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            hunter_count: HUNTER_COUNT,
            fear_ceiling: FEAR_CEILING,
            fear_rate: FEAR_RATE,
            boredom_ceiling: BOREDOM_CEILING,
            win_threshold: WIN_THRESHOLD,
            ghost_evidence_chance: GHOST_EVIDENCE_CHANCE,
            hunter_tick: TickDelay::from_millis(20, 100),
            ghost_tick: TickDelay::from_millis(50, 100),
        }
    }
}

impl SimConfig {
    /// Same rules, no pauses between ticks.
    pub fn without_delays() -> Self {
        Self {
            hunter_tick: TickDelay::none(),
            ghost_tick: TickDelay::none(),
            ..Self::default()
        }
    }
}
