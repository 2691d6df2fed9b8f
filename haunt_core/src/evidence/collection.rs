//! Ordered collections of evidence handles.

use serde::{Deserialize, Serialize};

use super::{EvidenceError, EvidenceId};

/// Insertion-ordered list of handles.
///
/// Used for a room's evidence, the building's log and each hunter's
/// notebook. Removing a handle here never touches any other collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceCollection {
    ids: Vec<EvidenceId>,
}

impl EvidenceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handle at the tail.
    pub fn append(&mut self, id: EvidenceId) {
        self.ids.push(id);
    }

    /// Remove the first occurrence of a handle, keeping the order of the rest.
    pub fn remove(&mut self, id: EvidenceId) -> Result<(), EvidenceError> {
        let position = self
            .ids
            .iter()
            .position(|held| *held == id)
            .ok_or(EvidenceError::NotFound(id))?;
        self.ids.remove(position);
        Ok(())
    }

    pub fn contains(&self, id: EvidenceId) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = EvidenceId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Take every handle out, leaving the collection empty.
    pub fn drain(&mut self) -> Vec<EvidenceId> {
        std::mem::take(&mut self.ids)
    }

    pub fn as_slice(&self) -> &[EvidenceId] {
        &self.ids
    }
}
