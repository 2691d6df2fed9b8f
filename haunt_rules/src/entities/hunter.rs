//! Hunter definitions.

use serde::{Deserialize, Serialize};

use super::HunterId;
use crate::mechanics::EvidenceKind;

/// The fixed part of a hunter: who they are and what their equipment reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunterProfile {
    pub id: HunterId,
    pub name: String,
    pub equipment: EvidenceKind,
}

impl HunterProfile {
    /// Create a new hunter carrying the given equipment.
    pub fn new(name: impl Into<String>, equipment: EvidenceKind) -> Self {
        Self {
            id: HunterId::new(),
            name: name.into(),
            equipment,
        }
    }

    /// Build a team, handing out equipment round-robin in kind order.
    pub fn team<I, S>(names: I) -> Vec<HunterProfile>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .zip(EvidenceKind::ALL.into_iter().cycle())
            .map(|(name, equipment)| HunterProfile::new(name, equipment))
            .collect()
    }
}
