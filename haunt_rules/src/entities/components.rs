//! Counter components shared by hunters and the ghost.

use serde::{Deserialize, Serialize};

use crate::mechanics::EvidenceKind;

/// Countdown that forces an agent out of the house when nothing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoredomCounter {
    pub remaining: u32,
    pub ceiling: u32,
}

impl BoredomCounter {
    /// A full counter.
    pub fn new(ceiling: u32) -> Self {
        Self {
            remaining: ceiling,
            ceiling,
        }
    }

    /// Something interesting happened.
    pub fn reset(&mut self) {
        self.remaining = self.ceiling;
    }

    /// Count down one tick. Returns `true` once the counter hits zero.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_exhausted()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Fear level that only rises, saturating at its ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FearMeter {
    pub level: u32,
    pub ceiling: u32,
}

impl FearMeter {
    pub fn new(ceiling: u32) -> Self {
        Self { level: 0, ceiling }
    }

    /// Raise fear by `amount`, never past the ceiling. Returns the new level.
    pub fn raise(&mut self, amount: u32) -> u32 {
        self.level = self.level.saturating_add(amount).min(self.ceiling);
        self.level
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= self.ceiling
    }
}

/// Set of distinct supernatural kinds a hunter has confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscoveredKinds {
    bits: u8,
}

impl DiscoveredKinds {
    pub fn new() -> Self {
        Self::default()
    }

    fn bit(kind: EvidenceKind) -> u8 {
        match kind {
            EvidenceKind::Emf => 1,
            EvidenceKind::Temperature => 1 << 1,
            EvidenceKind::Fingerprints => 1 << 2,
            EvidenceKind::Sound => 1 << 3,
        }
    }

    /// Record a kind. Returns `true` if it was not known before.
    pub fn record(&mut self, kind: EvidenceKind) -> bool {
        let bit = Self::bit(kind);
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    pub fn contains(&self, kind: EvidenceKind) -> bool {
        self.bits & Self::bit(kind) != 0
    }

    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Known kinds in canonical order.
    pub fn kinds(&self) -> Vec<EvidenceKind> {
        EvidenceKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .collect()
    }
}
