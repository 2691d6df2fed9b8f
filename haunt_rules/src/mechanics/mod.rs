//! Investigation mechanics: evidence kinds, supernatural bands, ghost archetypes.

use serde::{Deserialize, Serialize};

/// The four kinds of evidence a hunter's equipment can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EvidenceKind {
    /// Electromagnetic field readings.
    Emf,
    Temperature,
    Fingerprints,
    Sound,
}

impl EvidenceKind {
    /// Every kind, in equipment-assignment order.
    pub const ALL: [EvidenceKind; 4] = [
        EvidenceKind::Emf,
        EvidenceKind::Temperature,
        EvidenceKind::Fingerprints,
        EvidenceKind::Sound,
    ];

    /// The inclusive band a measurement must fall in to count as supernatural.
    pub fn supernatural_band(&self) -> SupernaturalBand {
        match self {
            EvidenceKind::Emf => SupernaturalBand::new(4.7, 5.0),
            EvidenceKind::Temperature => SupernaturalBand::new(-10.0, 1.0),
            EvidenceKind::Fingerprints => SupernaturalBand::new(1.0, 1.0),
            EvidenceKind::Sound => SupernaturalBand::new(65.0, 75.0),
        }
    }

    /// Check whether a measurement of this kind is supernatural.
    pub fn is_supernatural(&self, value: f64) -> bool {
        self.supernatural_band().contains(value)
    }

    /// Range a hunter's equipment draws mundane readings from.
    ///
    /// Every range is disjoint from the kind's supernatural band.
    pub fn standard_range(&self) -> Measurement {
        match self {
            EvidenceKind::Emf => Measurement::Uniform { min: 0.0, max: 4.7 },
            EvidenceKind::Temperature => Measurement::Uniform { min: 2.0, max: 27.0 },
            EvidenceKind::Fingerprints => Measurement::Fixed(0.0),
            EvidenceKind::Sound => Measurement::Uniform { min: 40.0, max: 65.0 },
        }
    }

    /// Short uppercase label used in narrative output.
    pub fn label(&self) -> &'static str {
        match self {
            EvidenceKind::Emf => "EMF",
            EvidenceKind::Temperature => "TEMPERATURE",
            EvidenceKind::Fingerprints => "FINGERPRINTS",
            EvidenceKind::Sound => "SOUND",
        }
    }
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive numeric band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupernaturalBand {
    pub min: f64,
    pub max: f64,
}

impl SupernaturalBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// How a measurement is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    /// Uniform over `[min, max)`.
    Uniform { min: f64, max: f64 },
    /// Uniform over `[min, max]`.
    UniformInclusive { min: f64, max: f64 },
    /// A whole number in `[min, max]`.
    Integer { min: i32, max: i32 },
    /// Always the same value.
    Fixed(f64),
}

impl Measurement {
    /// Map a sample `t` in `[0, 1)` onto this measurement.
    ///
    /// Keeps this crate free of a random number generator; callers feed
    /// in whatever source they use.
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Measurement::Uniform { min, max } => {
                let value = min + (max - min) * t;
                if value >= max {
                    min
                } else {
                    value
                }
            }
            Measurement::UniformInclusive { min, max } => min + (max - min) * t,
            Measurement::Integer { min, max } => {
                let span = (max - min + 1) as f64;
                let offset = ((span * t) as i32).min(max - min);
                (min + offset) as f64
            }
            Measurement::Fixed(value) => value,
        }
    }

    /// Check whether a value can come out of this measurement.
    pub fn covers(&self, value: f64) -> bool {
        match *self {
            Measurement::Uniform { min, max } => value >= min && value < max,
            Measurement::UniformInclusive { min, max } => value >= min && value <= max,
            Measurement::Integer { min, max } => {
                value.fract() == 0.0 && value >= min as f64 && value <= max as f64
            }
            Measurement::Fixed(fixed) => value == fixed,
        }
    }

    /// Check whether any value of this measurement lands in the band.
    pub fn overlaps(&self, band: &SupernaturalBand) -> bool {
        match *self {
            Measurement::Uniform { min, max } => min <= band.max && band.min < max,
            Measurement::UniformInclusive { min, max } => min <= band.max && band.min <= max,
            Measurement::Integer { min, max } => {
                (min..=max).any(|value| band.contains(value as f64))
            }
            Measurement::Fixed(value) => band.contains(value),
        }
    }
}

/// The ghost's fixed class.
///
/// Each archetype produces exactly three of the four evidence kinds; the
/// omitted kind is the clue the hunters deduce from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GhostArchetype {
    Poltergeist,
    Banshee,
    Bullies,
    Phantom,
}

impl GhostArchetype {
    pub const ALL: [GhostArchetype; 4] = [
        GhostArchetype::Poltergeist,
        GhostArchetype::Banshee,
        GhostArchetype::Bullies,
        GhostArchetype::Phantom,
    ];

    /// The three kinds this archetype can leave behind.
    pub fn evidence_kinds(&self) -> [EvidenceKind; 3] {
        match self {
            GhostArchetype::Poltergeist => [
                EvidenceKind::Emf,
                EvidenceKind::Temperature,
                EvidenceKind::Fingerprints,
            ],
            GhostArchetype::Banshee => [
                EvidenceKind::Emf,
                EvidenceKind::Temperature,
                EvidenceKind::Sound,
            ],
            GhostArchetype::Bullies => [
                EvidenceKind::Emf,
                EvidenceKind::Fingerprints,
                EvidenceKind::Sound,
            ],
            GhostArchetype::Phantom => [
                EvidenceKind::Temperature,
                EvidenceKind::Fingerprints,
                EvidenceKind::Sound,
            ],
        }
    }

    /// The one kind this archetype never produces.
    pub fn missing_kind(&self) -> EvidenceKind {
        match self {
            GhostArchetype::Poltergeist => EvidenceKind::Sound,
            GhostArchetype::Banshee => EvidenceKind::Fingerprints,
            GhostArchetype::Bullies => EvidenceKind::Temperature,
            GhostArchetype::Phantom => EvidenceKind::Emf,
        }
    }

    /// Range the ghost's measurements are drawn from, whatever the kind.
    pub fn measurement(&self) -> Measurement {
        match self {
            GhostArchetype::Poltergeist => Measurement::UniformInclusive { min: 0.0, max: 5.0 },
            GhostArchetype::Banshee => Measurement::UniformInclusive {
                min: -10.0,
                max: 27.0,
            },
            GhostArchetype::Bullies => Measurement::Integer { min: 0, max: 1 },
            GhostArchetype::Phantom => Measurement::UniformInclusive {
                min: 40.0,
                max: 75.0,
            },
        }
    }
}

impl std::fmt::Display for GhostArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GhostArchetype::Poltergeist => "Poltergeist",
            GhostArchetype::Banshee => "Banshee",
            GhostArchetype::Bullies => "Bullies",
            GhostArchetype::Phantom => "Phantom",
        };
        f.write_str(name)
    }
}
