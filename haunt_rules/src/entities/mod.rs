//! Entity definitions for the haunted house.

mod components;
mod hunter;

pub use components::*;
pub use hunter::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for hunters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HunterId(pub Uuid);

impl HunterId {
    /// Create a new random hunter ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HunterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HunterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a room in the house.
///
/// Rooms are numbered densely in layout order. The ordering doubles as the
/// global lock order when two rooms are held at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl RoomId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room#{}", self.0)
    }
}
