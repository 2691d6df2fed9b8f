//! Hunter agent state machine.

use haunt_rules::{BoredomCounter, EvidenceKind, FearMeter, HunterId, RoomId, SimConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::pause;
use crate::building::{Building, HunterEntry};
use crate::evidence::EvidenceId;
use crate::events::{EventSink, SimEvent};

/// Fear events are reported each time fear crosses a multiple of this.
const FEAR_MILESTONE: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HunterState {
    Active,
    /// Found enough distinct supernatural kinds.
    Won,
    ScaredAway,
    Bored,
}

impl HunterState {
    pub fn is_terminal(&self) -> bool {
        *self != HunterState::Active
    }
}

/// What a hunter does with a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunterAction {
    Investigate,
    Move,
    Share,
}

impl HunterAction {
    pub const ALL: [HunterAction; 3] = [
        HunterAction::Investigate,
        HunterAction::Move,
        HunterAction::Share,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// The thread-owned half of a hunter. The notebook lives in the building.
#[derive(Debug, Clone)]
pub struct HunterAgent {
    pub id: HunterId,
    pub name: String,
    pub equipment: EvidenceKind,
    pub room: RoomId,
    pub fear: FearMeter,
    pub boredom: BoredomCounter,
    pub state: HunterState,
    win_threshold: usize,
    fear_rate: u32,
}

impl HunterAgent {
    pub fn new(entry: &HunterEntry, room: RoomId, config: &SimConfig) -> Self {
        Self {
            id: entry.id(),
            name: entry.name().to_string(),
            equipment: entry.profile.equipment,
            room,
            fear: FearMeter::new(config.fear_ceiling),
            boredom: BoredomCounter::new(config.boredom_ceiling),
            state: HunterState::Active,
            win_threshold: config.win_threshold,
            fear_rate: config.fear_rate,
        }
    }

    /// Tick until the hunter leaves the investigation.
    pub fn run<R: Rng + ?Sized>(mut self, building: &Building, sink: &dyn EventSink, rng: &mut R) -> Self {
        while !self.state.is_terminal() {
            self.tick(building, sink, rng);
            if !self.state.is_terminal() {
                pause(building.config.hunter_tick, rng);
            }
        }
        self
    }

    /// One tick with a uniformly chosen action.
    pub fn tick<R: Rng + ?Sized>(&mut self, building: &Building, sink: &dyn EventSink, rng: &mut R) -> HunterState {
        let action = HunterAction::random(rng);
        trace!(hunter = %self.name, ?action, room = building.room_name(self.room), "hunter tick");
        self.step(action, building, sink, rng)
    }

    /// One tick with the given action.
    ///
    /// Exit checks run in a fixed order: enough evidence, then fear, then
    /// (after the action) enough evidence again, then boredom.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        action: HunterAction,
        building: &Building,
        sink: &dyn EventSink,
        rng: &mut R,
    ) -> HunterState {
        if self.state.is_terminal() {
            return self.state;
        }

        if self.has_won(building) {
            return self.finish(HunterState::Won, sink);
        }

        if building.graph.room(self.room).has_ghost() {
            let before = self.fear.level;
            let fear = self.fear.raise(self.fear_rate);
            self.boredom.reset();
            if fear / FEAR_MILESTONE > before / FEAR_MILESTONE {
                sink.emit(SimEvent::FearRising {
                    hunter: self.name.clone(),
                    fear,
                });
            }
            if self.fear.is_maxed() {
                return self.finish(HunterState::ScaredAway, sink);
            }
        }

        match action {
            HunterAction::Investigate => self.investigate(building, sink, rng),
            HunterAction::Move => self.wander(building, sink, rng),
            HunterAction::Share => self.share(building, sink, rng),
        }

        if self.has_won(building) {
            return self.finish(HunterState::Won, sink);
        }

        if self.boredom.tick() {
            return self.finish(HunterState::Bored, sink);
        }

        self.state
    }

    /// Distinct supernatural kinds in this hunter's notebook.
    pub fn discovered(&self, building: &Building) -> usize {
        building
            .roster
            .get(self.id)
            .map_or(0, HunterEntry::discovered_count)
    }

    fn has_won(&self, building: &Building) -> bool {
        self.discovered(building) >= self.win_threshold
    }

    fn finish(&mut self, state: HunterState, sink: &dyn EventSink) -> HunterState {
        self.state = state;
        info!(hunter = %self.name, ?state, fear = self.fear.level, "hunter finished");
        sink.emit(SimEvent::HunterFinished {
            hunter: self.name.clone(),
            state,
        });
        state
    }

    /// Look for ghostly evidence this hunter's equipment reads. An empty room
    /// gets an ordinary reading instead. Skipped if the room is busy.
    pub fn investigate<R: Rng + ?Sized>(&mut self, building: &Building, sink: &dyn EventSink, rng: &mut R) {
        let room = building.graph.room(self.room);
        let Some(mut state) = room.try_enter() else {
            debug!(hunter = %self.name, room = %room.name, "room busy, investigation skipped");
            return;
        };

        if state.evidence.is_empty() {
            let value = self.equipment.standard_range().sample(rng.gen());
            let id = building.evidence.record(self.equipment, value);
            state.evidence.append(id);
            drop(state);

            sink.emit(SimEvent::StandardEvidenceLogged {
                hunter: self.name.clone(),
                kind: self.equipment,
                room: room.name.clone(),
            });
            return;
        }

        let Some((id, record)) = building
            .evidence
            .first_supernatural_of(state.evidence.iter(), self.equipment)
        else {
            return;
        };
        if state.evidence.remove(id).is_err() {
            return;
        }
        let fresh = building
            .roster
            .get(self.id)
            .is_some_and(|entry| entry.notebook().file(id, record.kind));
        drop(state);

        self.boredom.reset();
        debug!(hunter = %self.name, %id, fresh, "supernatural evidence collected");
        sink.emit(SimEvent::EvidenceCollected {
            hunter: self.name.clone(),
            kind: record.kind,
            room: room.name.clone(),
        });
    }

    /// Walk through a random door.
    pub fn wander<R: Rng + ?Sized>(&mut self, building: &Building, sink: &dyn EventSink, rng: &mut R) {
        let Some(next) = building.graph.pick_random_neighbor(self.room, rng) else {
            return;
        };
        if !self.move_to(next, building) {
            return;
        }
        sink.emit(SimEvent::HunterMoved {
            hunter: self.name.clone(),
            room: building.room_name(next).to_string(),
        });
    }

    /// Move between occupant sets with both rooms locked.
    pub fn move_to(&mut self, next: RoomId, building: &Building) -> bool {
        let Some((mut here, mut there)) = building.graph.lock_pair(self.room, next) else {
            return false;
        };
        here.remove_hunter(self.id);
        there.add_hunter(self.id);
        self.room = next;
        true
    }

    /// Pass a ghostly record to a random hunter in the same room.
    pub fn share<R: Rng + ?Sized>(&mut self, building: &Building, sink: &dyn EventSink, rng: &mut R) {
        let others = building.graph.room(self.room).enter().others(self.id);
        if others.is_empty() {
            return;
        }
        let recipient_id = others[rng.gen_range(0..others.len())];
        let (Some(me), Some(recipient)) = (
            building.roster.get(self.id),
            building.roster.get(recipient_id),
        ) else {
            return;
        };

        // One notebook at a time.
        let held: Vec<EvidenceId> = recipient.notebook().evidence.iter().collect();
        let mine: Vec<EvidenceId> = me.notebook().evidence.iter().collect();
        let Some((id, record)) = building.evidence.find_first(
            mine.into_iter().filter(|id| !held.contains(id)),
            |record| record.is_supernatural(),
        ) else {
            return;
        };

        let fresh = recipient.notebook().file(id, record.kind);
        debug!(from = %self.name, to = recipient.name(), %id, fresh, "evidence shared");
        sink.emit(SimEvent::EvidenceShared {
            from: self.name.clone(),
            to: recipient.name().to_string(),
            kind: record.kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::{GhostPlacement, RoomGraph};
    use crate::events::{NullSink, RecordingSink};
    use haunt_rules::{GhostArchetype, HouseLayout, HunterProfile};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Van - Hallway - Kitchen, ghost in the kitchen.
    fn building_with(hunters: Vec<HunterProfile>, config: SimConfig) -> Building {
        let layout = HouseLayout::new(["Van", "Hallway", "Kitchen"])
            .with_connection("Van", "Hallway")
            .with_connection("Hallway", "Kitchen");
        let graph = RoomGraph::from_layout(&layout).unwrap();
        let ghost = GhostPlacement {
            archetype: GhostArchetype::Poltergeist,
            room: RoomId(2),
        };
        Building::new(graph, hunters, ghost, config).unwrap()
    }

    fn agent(building: &Building, index: usize) -> HunterAgent {
        let entry = building.roster.iter().nth(index).unwrap();
        HunterAgent::new(entry, building.graph.start_room(), &building.config)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(5)
    }

    #[test]
    fn test_investigate_empty_room_logs_standard_reading() {
        let building = building_with(HunterProfile::team(["Ada"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);
        let sink = RecordingSink::new();

        ada.investigate(&building, &sink, &mut rng());

        let van = building.graph.room(RoomId(0)).snapshot();
        assert_eq!(van.evidence.len(), 1);
        assert_eq!(building.evidence.global_len(), 1);
        let id = van.evidence.iter().next().unwrap();
        let record = building.evidence.get(id).unwrap();
        assert_eq!(record.kind, EvidenceKind::Emf);
        assert!(!record.is_supernatural());
        assert!(matches!(sink.events()[0], SimEvent::StandardEvidenceLogged { .. }));
    }

    #[test]
    fn test_investigate_collects_matching_supernatural() {
        let building = building_with(HunterProfile::team(["Ada"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);
        let mundane = building.evidence.record(EvidenceKind::Emf, 1.0);
        let ghostly = building.evidence.record(EvidenceKind::Emf, 4.8);
        {
            let mut van = building.graph.room(RoomId(0)).enter();
            van.evidence.append(mundane);
            van.evidence.append(ghostly);
        }
        ada.boredom.remaining = 10;

        ada.investigate(&building, &NullSink, &mut rng());

        let van = building.graph.room(RoomId(0)).snapshot();
        assert_eq!(van.evidence.as_slice(), &[mundane]);
        let notebook = building.roster.get(ada.id).unwrap().notebook().clone();
        assert!(notebook.evidence.contains(ghostly));
        assert!(notebook.discovered.contains(EvidenceKind::Emf));
        assert_eq!(ada.boredom.remaining, ada.boredom.ceiling);
        // Still logged building-wide.
        assert!(building.evidence.global_ids().contains(&ghostly));
    }

    #[test]
    fn test_investigate_ignores_other_kinds() {
        let building = building_with(HunterProfile::team(["Ada"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);
        let sound = building.evidence.record(EvidenceKind::Sound, 70.0);
        building.graph.room(RoomId(0)).enter().evidence.append(sound);

        ada.investigate(&building, &NullSink, &mut rng());

        assert_eq!(building.graph.room(RoomId(0)).snapshot().evidence.len(), 1);
        assert_eq!(ada.discovered(&building), 0);
    }

    #[test]
    fn test_investigate_skips_busy_room() {
        let building = building_with(HunterProfile::team(["Ada"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);
        let sink = RecordingSink::new();

        let held = building.graph.room(RoomId(0)).enter();
        ada.investigate(&building, &sink, &mut rng());
        drop(held);

        assert_eq!(building.evidence.global_len(), 0);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_move_keeps_occupancy_consistent() {
        let building = building_with(HunterProfile::team(["Ada"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);

        ada.wander(&building, &NullSink, &mut rng());

        assert_eq!(ada.room, RoomId(1), "the van only leads to the hallway");
        assert_eq!(building.occupancy().room_of(ada.id), Some(RoomId(1)));
        assert!(!building.graph.room(RoomId(0)).has_hunters());
    }

    #[test]
    fn test_share_gives_first_unheld_record() {
        let building = building_with(HunterProfile::team(["Ada", "Bo"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);
        let bo = agent(&building, 1);
        let emf = building.evidence.record(EvidenceKind::Emf, 4.9);
        building.roster.get(ada.id).unwrap().notebook().file(emf, EvidenceKind::Emf);
        let sink = RecordingSink::new();

        ada.share(&building, &sink, &mut rng());

        let bo_book = building.roster.get(bo.id).unwrap().notebook().clone();
        assert!(bo_book.evidence.contains(emf));
        assert!(bo_book.discovered.contains(EvidenceKind::Emf));
        // The sharer keeps its handle.
        assert!(building.roster.get(ada.id).unwrap().notebook().evidence.contains(emf));
        assert_eq!(sink.events().len(), 1);

        // Nothing new to give the second time.
        ada.share(&building, &sink, &mut rng());
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn test_share_needs_company() {
        let building = building_with(HunterProfile::team(["Ada"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);
        let emf = building.evidence.record(EvidenceKind::Emf, 4.9);
        building.roster.get(ada.id).unwrap().notebook().file(emf, EvidenceKind::Emf);
        let sink = RecordingSink::new();

        ada.share(&building, &sink, &mut rng());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_win_is_checked_before_fear() {
        let building = building_with(HunterProfile::team(["Ada"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);
        ada.move_to(RoomId(1), &building);
        ada.move_to(RoomId(2), &building);
        ada.fear.level = ada.fear.ceiling - 1;
        {
            let entry = building.roster.get(ada.id).unwrap();
            let mut notebook = entry.notebook();
            for (slot, kind) in [EvidenceKind::Emf, EvidenceKind::Temperature, EvidenceKind::Sound]
                .into_iter()
                .enumerate()
            {
                notebook.file(EvidenceId(slot), kind);
            }
        }

        let state = ada.step(HunterAction::Investigate, &building, &NullSink, &mut rng());
        assert_eq!(state, HunterState::Won);
        assert_eq!(ada.fear.level, ada.fear.ceiling - 1, "fear untouched on a winning tick");
    }

    #[test]
    fn test_win_on_the_tick_it_happens() {
        let building = building_with(HunterProfile::team(["Ada"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);
        {
            let entry = building.roster.get(ada.id).unwrap();
            let mut notebook = entry.notebook();
            notebook.file(EvidenceId(100), EvidenceKind::Temperature);
            notebook.file(EvidenceId(101), EvidenceKind::Sound);
        }
        let ghostly = building.evidence.record(EvidenceKind::Emf, 4.75);
        building.graph.room(RoomId(0)).enter().evidence.append(ghostly);
        ada.boredom.remaining = 1;

        let state = ada.step(HunterAction::Investigate, &building, &NullSink, &mut rng());
        assert_eq!(state, HunterState::Won, "won before boredom runs out");
    }

    #[test]
    fn test_fear_ceiling_means_scared_away() {
        let config = SimConfig {
            fear_ceiling: 5,
            ..SimConfig::without_delays()
        };
        let building = building_with(HunterProfile::team(["Ada"]), config);
        let mut ada = agent(&building, 0);
        ada.move_to(RoomId(1), &building);
        ada.move_to(RoomId(2), &building);
        let mut rng = rng();

        let mut state = HunterState::Active;
        for _ in 0..10 {
            state = ada.step(HunterAction::Share, &building, &NullSink, &mut rng);
            assert!(ada.fear.level <= ada.fear.ceiling);
            if state.is_terminal() {
                break;
            }
        }
        assert_eq!(state, HunterState::ScaredAway);
        assert_eq!(ada.fear.level, 5);
    }

    #[test]
    fn test_boredom_ends_quiet_investigation() {
        let config = SimConfig {
            boredom_ceiling: 3,
            ..SimConfig::without_delays()
        };
        let building = building_with(HunterProfile::team(["Ada"]), config);
        let mut ada = agent(&building, 0);
        let sink = RecordingSink::new();
        let mut rng = rng();

        assert_eq!(ada.step(HunterAction::Share, &building, &sink, &mut rng), HunterState::Active);
        assert_eq!(ada.step(HunterAction::Share, &building, &sink, &mut rng), HunterState::Active);
        assert_eq!(ada.step(HunterAction::Share, &building, &sink, &mut rng), HunterState::Bored);
        assert_eq!(ada.step(HunterAction::Move, &building, &sink, &mut rng), HunterState::Bored);
        assert_eq!(ada.room, RoomId(0), "terminal hunters stay put");
        assert!(matches!(
            sink.events().last(),
            Some(SimEvent::HunterFinished { state: HunterState::Bored, .. })
        ));
    }

    #[test]
    fn test_fear_milestones_are_reported() {
        let building = building_with(HunterProfile::team(["Ada"]), SimConfig::without_delays());
        let mut ada = agent(&building, 0);
        ada.move_to(RoomId(1), &building);
        ada.move_to(RoomId(2), &building);
        ada.fear.level = 24;
        let sink = RecordingSink::new();

        ada.step(HunterAction::Share, &building, &sink, &mut rng());
        assert_eq!(
            sink.events(),
            vec![SimEvent::FearRising {
                hunter: "Ada".into(),
                fear: 25
            }]
        );
    }
}
