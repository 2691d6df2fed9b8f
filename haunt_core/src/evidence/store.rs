//! Evidence store - the arena every reading lives in.

use std::sync::Mutex;

use haunt_rules::EvidenceKind;

use super::{EvidenceCollection, EvidenceId, EvidenceRecord};
use crate::sync::lock;

/// Arena plus the building-wide log.
#[derive(Debug, Default)]
struct Ledger {
    /// Handle of `records[0]`. Advances on drain so handles are never reused.
    base: usize,

    /// Live records, addressed by `EvidenceId` minus `base`.
    records: Vec<EvidenceRecord>,

    /// Building-global collection, in the order readings were taken.
    global: EvidenceCollection,
}

/// Shared, lock-guarded evidence arena for one building.
///
/// The store lock is always the innermost one: callers may hold a room or
/// notebook lock while calling in, never the other way round.
#[derive(Debug, Default)]
pub struct EvidenceStore {
    ledger: Mutex<Ledger>,
}

impl Ledger {
    fn slot(&self, id: EvidenceId) -> Option<&EvidenceRecord> {
        id.0.checked_sub(self.base).and_then(|index| self.records.get(index))
    }
}

impl EvidenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new reading and log it building-wide.
    pub fn record(&self, kind: EvidenceKind, value: f64) -> EvidenceId {
        let mut ledger = lock(&self.ledger);
        let id = EvidenceId(ledger.base + ledger.records.len());
        ledger.records.push(EvidenceRecord::new(kind, value));
        ledger.global.append(id);
        id
    }

    /// Look up a record by handle.
    pub fn get(&self, id: EvidenceId) -> Option<EvidenceRecord> {
        lock(&self.ledger).slot(id).copied()
    }

    /// Find the first handle, in iteration order, whose record matches.
    pub fn find_first<I, F>(&self, ids: I, predicate: F) -> Option<(EvidenceId, EvidenceRecord)>
    where
        I: IntoIterator<Item = EvidenceId>,
        F: Fn(&EvidenceRecord) -> bool,
    {
        let ledger = lock(&self.ledger);
        ids.into_iter()
            .filter_map(|id| ledger.slot(id).map(|record| (id, *record)))
            .find(|(_, record)| predicate(record))
    }

    /// First supernatural record among `ids` of the given kind.
    pub fn first_supernatural_of<I>(&self, ids: I, kind: EvidenceKind) -> Option<(EvidenceId, EvidenceRecord)>
    where
        I: IntoIterator<Item = EvidenceId>,
    {
        self.find_first(ids, |record| record.kind == kind && record.is_supernatural())
    }

    /// Snapshot of the building-global collection.
    pub fn global_ids(&self) -> Vec<EvidenceId> {
        lock(&self.ledger).global.as_slice().to_vec()
    }

    pub fn global_len(&self) -> usize {
        lock(&self.ledger).global.len()
    }

    /// Number of live records in the arena.
    pub fn record_count(&self) -> usize {
        lock(&self.ledger).records.len()
    }

    /// Discard every record at teardown. Returns how many were dropped.
    ///
    /// Handles still held by rooms or notebooks resolve to nothing afterwards,
    /// and later records get fresh handles.
    pub fn drain(&self) -> usize {
        let mut ledger = lock(&self.ledger);
        ledger.global.drain();
        let dropped = ledger.records.len();
        ledger.base += dropped;
        ledger.records.clear();
        dropped
    }
}
