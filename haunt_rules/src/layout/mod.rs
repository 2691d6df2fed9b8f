//! House layouts - the static room graph a round is played on.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::LayoutError;

const DEFAULT_HOUSE: &str = include_str!("house.toml");

/// Rooms and the doors between them, as written in a layout file.
///
/// The first room is where hunters arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseLayout {
    pub rooms: Vec<String>,
    #[serde(default)]
    pub connections: Vec<(String, String)>,
}

impl HouseLayout {
    /// Parse and validate a layout from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, LayoutError> {
        let layout: HouseLayout = toml::from_str(source)?;
        layout.validate()?;
        Ok(layout)
    }

    /// The fourteen-room house used when no layout file is given.
    pub fn default_house() -> Result<Self, LayoutError> {
        Self::from_toml_str(DEFAULT_HOUSE)
    }

    /// Build a layout in code. Validation is left to the caller.
    pub fn new<R, S>(rooms: R) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rooms: rooms.into_iter().map(Into::into).collect(),
            connections: Vec::new(),
        }
    }

    /// Add a door between two rooms.
    pub fn with_connection(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.connections.push((a.into(), b.into()));
        self
    }

    /// Name of the room hunters start in.
    pub fn start_room(&self) -> Option<&str> {
        self.rooms.first().map(String::as_str)
    }

    /// Position of a room in layout order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.rooms.iter().position(|room| room == name)
    }

    /// Check that the layout describes a playable house.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rooms.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut seen = HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.as_str()) {
                return Err(LayoutError::DuplicateRoom(room.clone()));
            }
        }

        let mut degree: HashMap<&str, usize> = HashMap::new();
        let mut doors = HashSet::new();
        for (a, b) in &self.connections {
            for end in [a, b] {
                if !seen.contains(end.as_str()) {
                    return Err(LayoutError::UnknownRoom(end.clone()));
                }
            }
            if a == b {
                return Err(LayoutError::SelfConnection(a.clone()));
            }
            let key = if a < b { (a, b) } else { (b, a) };
            if !doors.insert(key) {
                return Err(LayoutError::DuplicateConnection(a.clone(), b.clone()));
            }
            *degree.entry(a.as_str()).or_default() += 1;
            *degree.entry(b.as_str()).or_default() += 1;
        }

        // Every room needs a way out, otherwise movement has nowhere to go.
        if let Some(isolated) = self
            .rooms
            .iter()
            .find(|room| degree.get(room.as_str()).copied().unwrap_or(0) == 0)
        {
            return Err(LayoutError::IsolatedRoom(isolated.clone()));
        }

        Ok(())
    }
}
