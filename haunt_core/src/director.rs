//! Director - runs a round to completion and judges it.

use std::thread;

use haunt_rules::{EvidenceKind, GhostArchetype};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agents::{GhostAgent, GhostState, HunterAgent, HunterState};
use crate::building::{Building, GhostPlacement};
use crate::error::SimError;
use crate::events::{EventSink, SimEvent};

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every hunter ran away scared.
    GhostWins,
    /// At least one hunter held out; the kind the ghost never produced
    /// identifies it.
    HuntersWin { missing_kind: EvidenceKind },
}

/// Decide the round from the hunters' final states.
pub fn judge(hunters: &[HunterState], archetype: GhostArchetype) -> Verdict {
    if hunters.iter().all(|state| *state == HunterState::ScaredAway) {
        Verdict::GhostWins
    } else {
        Verdict::HuntersWin {
            missing_kind: archetype.missing_kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HunterReport {
    pub name: String,
    pub equipment: EvidenceKind,
    pub state: HunterState,
    pub fear: u32,
    pub room: String,
    pub evidence_held: usize,
    pub discovered: Vec<EvidenceKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GhostReport {
    pub archetype: GhostArchetype,
    pub room: String,
    pub state: GhostState,
}

/// Everything known once every agent has stopped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundReport {
    pub verdict: Verdict,
    pub hunters: Vec<HunterReport>,
    pub ghost: GhostReport,
    pub evidence_logged: usize,
}

impl RoundReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Final agents of a round, before they are summarized.
#[derive(Debug)]
pub struct RoundOutcome {
    pub hunters: Vec<HunterAgent>,
    pub ghost: GhostAgent,
}

/// Starts one thread per agent and waits for all of them.
#[derive(Debug, Default)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    /// Run the round, then judge it.
    pub fn run(&self, building: &Building, sink: &dyn EventSink) -> Result<RoundReport, SimError> {
        let outcome = self.play(building, sink)?;
        let report = self.report(building, &outcome);
        sink.emit(SimEvent::RoundOver {
            verdict: report.verdict,
            archetype: building.ghost.archetype,
        });
        info!(verdict = ?report.verdict, evidence = report.evidence_logged, "round over");
        Ok(report)
    }

    /// Build fresh agents, each standing in the room that currently lists it.
    ///
    /// A second round on the same building therefore picks up where the
    /// first one left everybody.
    pub fn cast(&self, building: &Building) -> (Vec<HunterAgent>, GhostAgent) {
        let occupancy = building.occupancy();
        let start = building.graph.start_room();
        let hunters = building
            .roster
            .iter()
            .map(|entry| {
                let room = occupancy.room_of(entry.id()).unwrap_or(start);
                HunterAgent::new(entry, room, &building.config)
            })
            .collect();
        let placement = GhostPlacement {
            room: occupancy.ghost_room().unwrap_or(building.ghost.room),
            ..building.ghost
        };
        (hunters, GhostAgent::new(placement, &building.config))
    }

    /// Run every agent on its own thread until each reaches a terminal state.
    pub fn play(&self, building: &Building, sink: &dyn EventSink) -> Result<RoundOutcome, SimError> {
        let (hunters, ghost) = self.cast(building);

        sink.emit(SimEvent::RoundStarted {
            hunters: hunters.iter().map(|h| h.name.clone()).collect(),
            ghost_room: building.room_name(ghost.room).to_string(),
        });
        info!(hunters = hunters.len(), "round started");

        thread::scope(|scope| -> Result<RoundOutcome, SimError> {
            let mut hunter_threads = Vec::with_capacity(hunters.len());
            for hunter in hunters {
                let name = hunter.name.clone();
                let handle = thread::Builder::new()
                    .name(format!("hunter-{name}"))
                    .spawn_scoped(scope, move || {
                        hunter.run(building, sink, &mut StdRng::from_entropy())
                    })?;
                hunter_threads.push((name, handle));
            }
            let ghost_thread = thread::Builder::new()
                .name("ghost".to_string())
                .spawn_scoped(scope, move || {
                    ghost.run(building, sink, &mut StdRng::from_entropy())
                })?;

            // Every thread is joined before a panic is surfaced.
            let joined: Vec<_> = hunter_threads
                .into_iter()
                .map(|(name, handle)| handle.join().map_err(|_| SimError::AgentPanicked(name)))
                .collect();
            let ghost = ghost_thread
                .join()
                .map_err(|_| SimError::AgentPanicked("ghost".to_string()));

            Ok(RoundOutcome {
                hunters: joined.into_iter().collect::<Result<_, _>>()?,
                ghost: ghost?,
            })
        })
    }

    /// Summarize a finished round.
    pub fn report(&self, building: &Building, outcome: &RoundOutcome) -> RoundReport {
        let states: Vec<HunterState> = outcome.hunters.iter().map(|h| h.state).collect();
        let verdict = judge(&states, outcome.ghost.archetype);

        let hunters = outcome
            .hunters
            .iter()
            .map(|hunter| {
                let notebook = building
                    .roster
                    .get(hunter.id)
                    .map(|entry| entry.notebook().clone())
                    .unwrap_or_default();
                HunterReport {
                    name: hunter.name.clone(),
                    equipment: hunter.equipment,
                    state: hunter.state,
                    fear: hunter.fear.level,
                    room: building.room_name(hunter.room).to_string(),
                    evidence_held: notebook.evidence.len(),
                    discovered: notebook.discovered.kinds(),
                }
            })
            .collect();

        RoundReport {
            verdict,
            hunters,
            ghost: GhostReport {
                archetype: outcome.ghost.archetype,
                room: building.room_name(outcome.ghost.room).to_string(),
                state: outcome.ghost.state,
            },
            evidence_logged: building.evidence.global_len(),
        }
    }
}
