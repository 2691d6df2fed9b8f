//! Ghost agent state machine.

use haunt_rules::{BoredomCounter, GhostArchetype, RoomId, SimConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::pause;
use crate::building::{Building, GhostPlacement};
use crate::events::{EventSink, SimEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostState {
    Active,
    /// The ghost lost interest. Ends the round once the hunters are done.
    Bored,
}

impl GhostState {
    pub fn is_terminal(&self) -> bool {
        *self == GhostState::Bored
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostAction {
    Move,
    LeaveEvidence,
    Idle,
}

impl GhostAction {
    pub const ALL: [GhostAction; 3] = [GhostAction::Move, GhostAction::LeaveEvidence, GhostAction::Idle];
}

#[derive(Debug, Clone)]
pub struct GhostAgent {
    pub archetype: GhostArchetype,
    pub room: RoomId,
    pub boredom: BoredomCounter,
    pub state: GhostState,
    /// Whether a hunter shared the room on the previous observation.
    hunter_in_sight: bool,
    evidence_chance: f64,
}

impl GhostAgent {
    pub fn new(placement: GhostPlacement, config: &SimConfig) -> Self {
        Self {
            archetype: placement.archetype,
            room: placement.room,
            boredom: BoredomCounter::new(config.boredom_ceiling),
            state: GhostState::Active,
            hunter_in_sight: false,
            evidence_chance: config.ghost_evidence_chance.clamp(0.0, 1.0),
        }
    }

    pub fn run<R: Rng + ?Sized>(mut self, building: &Building, sink: &dyn EventSink, rng: &mut R) -> Self {
        while !self.state.is_terminal() {
            self.tick(building, sink, rng);
            if !self.state.is_terminal() {
                pause(building.config.ghost_tick, rng);
            }
        }
        self
    }

    /// Observe, pick an action, act.
    ///
    /// With a hunter in the room the ghost only ever leaves evidence or
    /// waits; alone it picks uniformly among all three actions.
    pub fn tick<R: Rng + ?Sized>(&mut self, building: &Building, sink: &dyn EventSink, rng: &mut R) -> GhostState {
        if self.state.is_terminal() {
            return self.state;
        }
        let hunter_present = self.observe(building);
        let action = if hunter_present {
            if rng.gen_bool(self.evidence_chance) {
                GhostAction::LeaveEvidence
            } else {
                GhostAction::Idle
            }
        } else {
            GhostAction::ALL[rng.gen_range(0..GhostAction::ALL.len())]
        };
        trace!(?action, hunter_present, room = building.room_name(self.room), "ghost tick");
        self.act(action, building, sink, rng);
        self.wind_down(sink)
    }

    /// One tick with the given action.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        action: GhostAction,
        building: &Building,
        sink: &dyn EventSink,
        rng: &mut R,
    ) -> GhostState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.observe(building);
        self.act(action, building, sink, rng);
        self.wind_down(sink)
    }

    /// Look for hunters. A fresh sighting resets boredom; a hunter who
    /// simply stays does not.
    pub fn observe(&mut self, building: &Building) -> bool {
        let present = building.graph.room(self.room).has_hunters();
        if present && !self.hunter_in_sight {
            debug!(room = building.room_name(self.room), "ghost spotted a hunter");
            self.boredom.reset();
        }
        self.hunter_in_sight = present;
        present
    }

    fn act<R: Rng + ?Sized>(&mut self, action: GhostAction, building: &Building, sink: &dyn EventSink, rng: &mut R) {
        match action {
            GhostAction::Move => self.drift(building, sink, rng),
            GhostAction::LeaveEvidence => self.leave_evidence(building, sink, rng),
            GhostAction::Idle => {}
        }
    }

    fn wind_down(&mut self, sink: &dyn EventSink) -> GhostState {
        if self.boredom.tick() {
            self.state = GhostState::Bored;
            info!(archetype = %self.archetype, "ghost got bored");
            sink.emit(SimEvent::GhostFinished { state: self.state });
        }
        self.state
    }

    /// Drift through a random door.
    pub fn drift<R: Rng + ?Sized>(&mut self, building: &Building, sink: &dyn EventSink, rng: &mut R) {
        let Some(next) = building.graph.pick_random_neighbor(self.room, rng) else {
            return;
        };
        {
            let Some((mut here, mut there)) = building.graph.lock_pair(self.room, next) else {
                return;
            };
            here.ghost = false;
            there.ghost = true;
            self.room = next;
        }
        sink.emit(SimEvent::GhostMoved {
            room: building.room_name(next).to_string(),
        });
    }

    /// Leave a reading of one of the archetype's kinds in the current room.
    /// Skipped if the room is busy.
    pub fn leave_evidence<R: Rng + ?Sized>(&mut self, building: &Building, sink: &dyn EventSink, rng: &mut R) {
        let room = building.graph.room(self.room);
        let Some(mut state) = room.try_enter() else {
            debug!(room = %room.name, "room busy, ghost evidence skipped");
            return;
        };

        let kinds = self.archetype.evidence_kinds();
        let kind = kinds[rng.gen_range(0..kinds.len())];
        let value = self.archetype.measurement().sample(rng.gen());
        let id = building.evidence.record(kind, value);
        state.evidence.append(id);
        drop(state);

        debug!(%id, %kind, value, "ghost left evidence");
        sink.emit(SimEvent::GhostLeftEvidence {
            kind,
            room: room.name.clone(),
        });
    }
}
