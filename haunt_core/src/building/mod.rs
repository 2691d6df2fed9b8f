//! Building - the room graph, the people in it and the evidence they leave.
//!
//! Lock order, outermost first:
//! 1. Room locks, lowest `RoomId` first when two are held
//! 2. One hunter notebook
//! 3. The evidence store

mod graph;
mod room;
mod roster;

pub use graph::*;
pub use room::*;
pub use roster::*;

use std::collections::HashMap;

use haunt_rules::{GhostArchetype, HouseLayout, HunterId, HunterProfile, RoomId, SimConfig};
use rand::Rng;
use tracing::info;

use crate::error::SimError;
use crate::evidence::EvidenceStore;

/// Where the ghost starts and what kind of ghost it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostPlacement {
    pub archetype: GhostArchetype,
    pub room: RoomId,
}

/// Shared state of one round.
#[derive(Debug)]
pub struct Building {
    pub graph: RoomGraph,
    pub roster: Roster,
    pub ghost: GhostPlacement,
    pub evidence: EvidenceStore,
    pub config: SimConfig,
}

impl Building {
    /// Place hunters in the start room and the ghost where it was put.
    pub fn new(
        graph: RoomGraph,
        hunters: Vec<HunterProfile>,
        ghost: GhostPlacement,
        config: SimConfig,
    ) -> Result<Self, SimError> {
        if hunters.is_empty() {
            return Err(SimError::NoHunters);
        }
        if hunters.iter().any(|h| h.name.trim().is_empty()) {
            return Err(SimError::BlankHunterName);
        }
        if graph.is_empty() {
            return Err(SimError::UnknownRoom(graph.start_room()));
        }
        let ghost_room = graph.get(ghost.room).ok_or(SimError::UnknownRoom(ghost.room))?;

        {
            let mut start = graph.room(graph.start_room()).enter();
            for hunter in &hunters {
                start.add_hunter(hunter.id);
            }
        }
        ghost_room.enter().ghost = true;

        Ok(Self {
            graph,
            roster: Roster::new(hunters),
            ghost,
            evidence: EvidenceStore::new(),
            config,
        })
    }

    /// Set up a round from a layout and a list of names.
    ///
    /// Equipment is handed out in kind order, the archetype is drawn at
    /// random, and the ghost starts in a random room other than the first.
    pub fn assemble<R: Rng + ?Sized>(
        layout: &HouseLayout,
        names: Vec<String>,
        config: SimConfig,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let graph = RoomGraph::from_layout(layout)?;
        let archetype = GhostArchetype::ALL[rng.gen_range(0..GhostArchetype::ALL.len())];
        let room = ghost_start_room(&graph, rng);
        info!(%archetype, room = graph.name(room), "ghost placed");

        Self::new(
            graph,
            HunterProfile::team(names),
            GhostPlacement { archetype, room },
            config,
        )
    }

    pub fn room_name(&self, id: RoomId) -> &str {
        self.graph.name(id)
    }

    pub fn hunter_name(&self, id: HunterId) -> &str {
        self.roster.name_of(id)
    }

    /// Where everyone currently is, according to the rooms.
    pub fn occupancy(&self) -> Occupancy {
        let mut occupancy = Occupancy::default();
        for room in self.graph.iter() {
            let state = room.enter();
            for hunter in &state.hunters {
                occupancy.hunters.entry(*hunter).or_default().push(room.id);
            }
            if state.ghost {
                occupancy.ghost.push(room.id);
            }
        }
        occupancy
    }
}

/// Uniform over every room, except that drawing the start room moves the
/// ghost to the last room instead.
pub fn ghost_start_room<R: Rng + ?Sized>(graph: &RoomGraph, rng: &mut R) -> RoomId {
    let drawn = RoomId(rng.gen_range(0..graph.len().max(1)));
    if drawn == graph.start_room() {
        graph.last_room()
    } else {
        drawn
    }
}

/// Room membership as recorded by the rooms themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    /// Rooms whose occupant set lists each hunter.
    pub hunters: HashMap<HunterId, Vec<RoomId>>,
    /// Rooms whose ghost slot is filled.
    pub ghost: Vec<RoomId>,
}

impl Occupancy {
    /// The single room holding `hunter`, if there is exactly one.
    pub fn room_of(&self, hunter: HunterId) -> Option<RoomId> {
        match self.hunters.get(&hunter).map(Vec::as_slice) {
            Some([room]) => Some(*room),
            _ => None,
        }
    }

    /// The single room holding the ghost, if there is exactly one.
    pub fn ghost_room(&self) -> Option<RoomId> {
        match self.ghost.as_slice() {
            [room] => Some(*room),
            _ => None,
        }
    }
}
