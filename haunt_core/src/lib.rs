//! # Haunt Core
//!
//! The concurrent side of the investigation. Hunters and a ghost run on their
//! own threads over a shared `Building`, racing to gather or hide evidence
//! until every one of them reaches a terminal state.
//!
//! ## Core Components
//!
//! - **evidence**: evidence arena, handles and ordered collections
//! - **building**: room graph with per-room locks, roster and notebooks
//! - **agents**: hunter and ghost state machines
//! - **director**: runs a round, joins every agent and judges the outcome
//! - **events**: narrative events and the sinks that receive them

pub mod agents;
pub mod building;
pub mod director;
pub mod error;
pub mod events;
pub mod evidence;
mod sync;

pub use agents::*;
pub use building::*;
pub use director::*;
pub use error::*;
pub use events::*;
pub use evidence::*;
