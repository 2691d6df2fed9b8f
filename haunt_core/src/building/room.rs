//! Rooms - graph nodes carrying their own lock.

use std::sync::{Mutex, MutexGuard};

use haunt_rules::{HunterId, RoomId};

use crate::evidence::EvidenceCollection;
use crate::sync::{lock, try_lock};

/// Everything in a room that agents mutate. Guarded by the room's lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomState {
    pub evidence: EvidenceCollection,
    pub hunters: Vec<HunterId>,
    pub ghost: bool,
}

impl RoomState {
    pub fn has_hunters(&self) -> bool {
        !self.hunters.is_empty()
    }

    pub fn has_ghost(&self) -> bool {
        self.ghost
    }

    pub fn contains_hunter(&self, id: HunterId) -> bool {
        self.hunters.contains(&id)
    }

    pub fn add_hunter(&mut self, id: HunterId) {
        if !self.contains_hunter(id) {
            self.hunters.push(id);
        }
    }

    /// Returns `false` if the hunter was not here.
    pub fn remove_hunter(&mut self, id: HunterId) -> bool {
        match self.hunters.iter().position(|h| *h == id) {
            Some(position) => {
                self.hunters.remove(position);
                true
            }
            None => false,
        }
    }

    /// Hunters present apart from `id`.
    pub fn others(&self, id: HunterId) -> Vec<HunterId> {
        self.hunters.iter().copied().filter(|h| *h != id).collect()
    }
}

/// A room in the house. Name and adjacency never change after setup.
#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub(crate) neighbors: Vec<RoomId>,
    state: Mutex<RoomState>,
}

impl Room {
    pub(crate) fn new(id: RoomId, name: String, neighbors: Vec<RoomId>) -> Self {
        Self {
            id,
            name,
            neighbors,
            state: Mutex::new(RoomState::default()),
        }
    }

    pub fn neighbors(&self) -> &[RoomId] {
        &self.neighbors
    }

    /// Wait for the room's lock.
    pub fn enter(&self) -> MutexGuard<'_, RoomState> {
        lock(&self.state)
    }

    /// Take the room's lock only if nobody holds it.
    pub fn try_enter(&self) -> Option<MutexGuard<'_, RoomState>> {
        try_lock(&self.state)
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> RoomState {
        self.enter().clone()
    }

    pub fn has_ghost(&self) -> bool {
        self.enter().ghost
    }

    pub fn has_hunters(&self) -> bool {
        self.enter().has_hunters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupants() {
        let a = HunterId::new();
        let b = HunterId::new();
        let mut state = RoomState::default();

        state.add_hunter(a);
        state.add_hunter(a);
        state.add_hunter(b);
        assert_eq!(state.hunters.len(), 2);
        assert_eq!(state.others(a), vec![b]);

        assert!(state.remove_hunter(a));
        assert!(!state.remove_hunter(a));
        assert_eq!(state.hunters, vec![b]);
    }

    #[test]
    fn test_try_enter_fails_while_held() {
        let room = Room::new(RoomId(0), "Attic".into(), Vec::new());
        let guard = room.enter();
        assert!(room.try_enter().is_none());
        drop(guard);
        assert!(room.try_enter().is_some());
    }
}
