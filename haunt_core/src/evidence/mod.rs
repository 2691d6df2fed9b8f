//! Evidence module - readings and where they are held.
//!
//! - **Records**: immutable readings stored once in the building's arena
//! - **Collections**: ordered lists of handles (room, building log, notebook)
//! - **Store**: the lock-guarded arena and building-global collection

mod collection;
mod record;
mod store;

pub use collection::*;
pub use record::*;
pub use store::*;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvidenceError {
    #[error("{0} is not in this collection")]
    NotFound(EvidenceId),
}
