//! Narrative events emitted by agents and the director.
//!
//! The simulation never prints. It hands `SimEvent`s to an `EventSink`;
//! the binary's sink turns them into lines on stdout.

use std::sync::Mutex;

use haunt_rules::{EvidenceKind, GhostArchetype};
use serde::Serialize;

use crate::agents::{GhostState, HunterState};
use crate::director::Verdict;
use crate::sync::lock;

/// Something worth telling the audience about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SimEvent {
    RoundStarted {
        hunters: Vec<String>,
        ghost_room: String,
    },
    HunterMoved {
        hunter: String,
        room: String,
    },
    EvidenceCollected {
        hunter: String,
        kind: EvidenceKind,
        room: String,
    },
    StandardEvidenceLogged {
        hunter: String,
        kind: EvidenceKind,
        room: String,
    },
    EvidenceShared {
        from: String,
        to: String,
        kind: EvidenceKind,
    },
    FearRising {
        hunter: String,
        fear: u32,
    },
    HunterFinished {
        hunter: String,
        state: HunterState,
    },
    GhostMoved {
        room: String,
    },
    GhostLeftEvidence {
        kind: EvidenceKind,
        room: String,
    },
    GhostFinished {
        state: GhostState,
    },
    RoundOver {
        verdict: Verdict,
        archetype: GhostArchetype,
    },
}

impl std::fmt::Display for SimEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimEvent::RoundStarted { hunters, ghost_room } => write!(
                f,
                "{} hunters enter the house; something stirs in the {}",
                hunters.join(", "),
                ghost_room
            ),
            SimEvent::HunterMoved { hunter, room } => write!(f, "{hunter} walks into the {room}"),
            SimEvent::EvidenceCollected { hunter, kind, room } => {
                write!(f, "{hunter} collects ghostly {kind} evidence in the {room}")
            }
            SimEvent::StandardEvidenceLogged { hunter, kind, room } => {
                write!(f, "{hunter} logs an ordinary {kind} reading in the {room}")
            }
            SimEvent::EvidenceShared { from, to, kind } => {
                write!(f, "{from} shares ghostly {kind} evidence with {to}")
            }
            SimEvent::FearRising { hunter, fear } => write!(f, "{hunter}'s fear climbs to {fear}"),
            SimEvent::HunterFinished { hunter, state } => match state {
                HunterState::Won => write!(f, "{hunter} has found three kinds of ghostly evidence"),
                HunterState::ScaredAway => write!(f, "{hunter} runs away scared"),
                HunterState::Bored => write!(f, "{hunter} got bored and left"),
                HunterState::Active => write!(f, "{hunter} is still investigating"),
            },
            SimEvent::GhostMoved { room } => write!(f, "the ghost drifts into the {room}"),
            SimEvent::GhostLeftEvidence { kind, room } => {
                write!(f, "the ghost leaves {kind} evidence in the {room}")
            }
            SimEvent::GhostFinished { state } => match state {
                GhostState::Bored => write!(f, "the ghost got bored"),
                GhostState::Active => write!(f, "the ghost is still haunting"),
            },
            SimEvent::RoundOver { verdict, archetype } => match verdict {
                Verdict::GhostWins => write!(f, "every hunter fled; the {archetype} wins"),
                Verdict::HuntersWin { missing_kind } => write!(
                    f,
                    "the hunters win; the ghost never left {missing_kind} evidence"
                ),
            },
        }
    }
}

/// Receiver of narrative events. Shared by every agent thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: SimEvent);
}

/// Prints each event on its own line.
#[derive(Debug, Default)]
pub struct StdoutNarrator;

impl EventSink for StdoutNarrator {
    fn emit(&self, event: SimEvent) {
        println!("{event}");
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SimEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SimEvent> {
        lock(&self.events).clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: SimEvent) {
        lock(&self.events).push(event);
    }
}

/// Drops everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: SimEvent) {}
}
