//! Hunter roster and notebooks.

use std::sync::{Mutex, MutexGuard};

use haunt_rules::{DiscoveredKinds, EvidenceKind, HunterId, HunterProfile};

use crate::evidence::{EvidenceCollection, EvidenceId};
use crate::sync::lock;

/// A hunter's personal evidence and the supernatural kinds it proves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    pub evidence: EvidenceCollection,
    pub discovered: DiscoveredKinds,
}

impl Notebook {
    /// File a supernatural record. Returns `true` if its kind is new.
    pub fn file(&mut self, id: EvidenceId, kind: EvidenceKind) -> bool {
        if !self.evidence.contains(id) {
            self.evidence.append(id);
        }
        self.discovered.record(kind)
    }
}

/// A hunter as the building knows them.
#[derive(Debug)]
pub struct HunterEntry {
    pub profile: HunterProfile,
    notebook: Mutex<Notebook>,
}

impl HunterEntry {
    pub fn new(profile: HunterProfile) -> Self {
        Self {
            profile,
            notebook: Mutex::new(Notebook::default()),
        }
    }

    pub fn id(&self) -> HunterId {
        self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    /// Lock the notebook. Never hold two notebooks at once.
    pub fn notebook(&self) -> MutexGuard<'_, Notebook> {
        lock(&self.notebook)
    }

    pub fn discovered_count(&self) -> usize {
        self.notebook().discovered.count()
    }
}

/// Every hunter taking part in the round.
#[derive(Debug, Default)]
pub struct Roster {
    entries: Vec<HunterEntry>,
}

impl Roster {
    pub fn new(profiles: impl IntoIterator<Item = HunterProfile>) -> Self {
        Self {
            entries: profiles.into_iter().map(HunterEntry::new).collect(),
        }
    }

    pub fn get(&self, id: HunterId) -> Option<&HunterEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn name_of(&self, id: HunterId) -> &str {
        self.get(id).map(HunterEntry::name).unwrap_or("unknown hunter")
    }

    pub fn iter(&self) -> impl Iterator<Item = &HunterEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notebook_files_once() {
        let mut notebook = Notebook::default();
        assert!(notebook.file(EvidenceId(1), EvidenceKind::Sound));
        assert!(!notebook.file(EvidenceId(1), EvidenceKind::Sound));
        assert_eq!(notebook.evidence.len(), 1);
        assert!(!notebook.file(EvidenceId(2), EvidenceKind::Sound));
        assert_eq!(notebook.evidence.len(), 2);
        assert_eq!(notebook.discovered.count(), 1);
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new(HunterProfile::team(["Ada", "Bo"]));
        let bo = roster.iter().nth(1).unwrap().id();
        assert_eq!(roster.name_of(bo), "Bo");
        assert_eq!(roster.name_of(HunterId::new()), "unknown hunter");
        assert_eq!(roster.len(), 2);
    }
}
