//! Evidence records - single readings taken in the house.

use haunt_rules::EvidenceKind;
use serde::{Deserialize, Serialize};

/// Handle to a record in the evidence store.
///
/// Collections hold handles, so one reading can sit in a room, the
/// building's log and a hunter's notebook at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EvidenceId(pub usize);

impl std::fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "evidence#{}", self.0)
    }
}

/// Whether a reading carries a paranormal signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Standard,
    Supernatural,
}

/// One reading. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub kind: EvidenceKind,
    pub value: f64,
}

impl EvidenceRecord {
    pub fn new(kind: EvidenceKind, value: f64) -> Self {
        Self { kind, value }
    }

    pub fn classification(&self) -> Classification {
        if self.kind.is_supernatural(self.value) {
            Classification::Supernatural
        } else {
            Classification::Standard
        }
    }

    pub fn is_supernatural(&self) -> bool {
        self.classification() == Classification::Supernatural
    }
}

impl std::fmt::Display for EvidenceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2}", self.kind, self.value)
    }
}
