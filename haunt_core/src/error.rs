//! Errors raised while setting up or running a round.

use haunt_rules::{LayoutError, RoomId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("a round needs at least one hunter")]
    NoHunters,

    #[error("hunter names cannot be blank")]
    BlankHunterName,

    #[error("{0} is not part of this building")]
    UnknownRoom(RoomId),

    #[error("failed to start agent thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("agent '{0}' panicked")]
    AgentPanicked(String),
}
