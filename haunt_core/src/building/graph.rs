//! Room graph - rooms joined by symmetric doors.

use std::sync::MutexGuard;

use haunt_rules::{HouseLayout, LayoutError, RoomId};
use rand::Rng;

use super::{Room, RoomState};

/// Collects rooms and doors before the graph is frozen.
#[derive(Debug, Default)]
pub struct RoomGraphBuilder {
    names: Vec<String>,
    adjacency: Vec<Vec<RoomId>>,
}

impl RoomGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(&mut self, name: impl Into<String>) -> RoomId {
        let id = RoomId(self.names.len());
        self.names.push(name.into());
        self.adjacency.push(Vec::new());
        id
    }

    fn name(&self, id: RoomId) -> String {
        self.names
            .get(id.index())
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    /// Add a door between `a` and `b`, recorded on both sides.
    pub fn connect(&mut self, a: RoomId, b: RoomId) -> Result<(), LayoutError> {
        for end in [a, b] {
            if end.index() >= self.names.len() {
                return Err(LayoutError::UnknownRoom(end.to_string()));
            }
        }
        if a == b {
            return Err(LayoutError::SelfConnection(self.name(a)));
        }
        if self.adjacency[a.index()].contains(&b) {
            return Err(LayoutError::DuplicateConnection(self.name(a), self.name(b)));
        }

        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
        Ok(())
    }

    pub fn build(self) -> RoomGraph {
        let rooms = self
            .names
            .into_iter()
            .zip(self.adjacency)
            .enumerate()
            .map(|(index, (name, neighbors))| Room::new(RoomId(index), name, neighbors))
            .collect();
        RoomGraph { rooms }
    }
}

/// The house. Adjacency is read-only once built, so lookups take no lock.
#[derive(Debug)]
pub struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    pub fn builder() -> RoomGraphBuilder {
        RoomGraphBuilder::new()
    }

    /// Build the graph a layout describes, in layout order.
    pub fn from_layout(layout: &HouseLayout) -> Result<Self, LayoutError> {
        layout.validate()?;

        let mut builder = RoomGraphBuilder::new();
        for name in &layout.rooms {
            builder.add_room(name.clone());
        }
        for (a, b) in &layout.connections {
            let a = layout
                .index_of(a)
                .ok_or_else(|| LayoutError::UnknownRoom(a.clone()))?;
            let b = layout
                .index_of(b)
                .ok_or_else(|| LayoutError::UnknownRoom(b.clone()))?;
            builder.connect(RoomId(a), RoomId(b))?;
        }
        Ok(builder.build())
    }

    /// Room by ID.
    ///
    /// # Panics
    ///
    /// If `id` did not come from this graph.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().find(|room| room.name == name).map(|room| room.id)
    }

    pub fn name(&self, id: RoomId) -> &str {
        &self.room(id).name
    }

    pub fn neighbors(&self, id: RoomId) -> &[RoomId] {
        self.room(id).neighbors()
    }

    pub fn are_adjacent(&self, a: RoomId, b: RoomId) -> bool {
        self.get(a).is_some_and(|room| room.neighbors.contains(&b))
    }

    /// Hunters arrive here.
    pub fn start_room(&self) -> RoomId {
        RoomId(0)
    }

    pub fn last_room(&self) -> RoomId {
        RoomId(self.rooms.len().saturating_sub(1))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Walk the neighbor list and stop at position `draw`, or at the last
    /// neighbor if the list runs out first.
    ///
    /// Any draw past the end lands on the last neighbor.
    pub fn neighbor_at(&self, id: RoomId, draw: usize) -> Option<RoomId> {
        let neighbors = self.neighbors(id);
        neighbors.get(draw).or(neighbors.last()).copied()
    }

    /// Pick a neighbor of `id` uniformly at random.
    pub fn pick_random_neighbor<R: Rng + ?Sized>(&self, id: RoomId, rng: &mut R) -> Option<RoomId> {
        let len = self.neighbors(id).len();
        if len == 0 {
            return None;
        }
        self.neighbor_at(id, rng.gen_range(0..len))
    }

    /// Lock two distinct rooms, lowest ID first, and hand the guards back in
    /// the caller's order.
    ///
    /// Returns `None` when `a == b`.
    pub fn lock_pair(
        &self,
        a: RoomId,
        b: RoomId,
    ) -> Option<(MutexGuard<'_, RoomState>, MutexGuard<'_, RoomState>)> {
        if a == b {
            return None;
        }
        if a < b {
            let first = self.room(a).enter();
            let second = self.room(b).enter();
            Some((first, second))
        } else {
            let second = self.room(b).enter();
            let first = self.room(a).enter();
            Some((first, second))
        }
    }
}
