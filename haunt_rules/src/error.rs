//! Errors raised while loading a house layout.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to parse layout: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("layout has no rooms")]
    Empty,

    #[error("room '{0}' is listed twice")]
    DuplicateRoom(String),

    #[error("connection refers to unknown room '{0}'")]
    UnknownRoom(String),

    #[error("room '{0}' cannot connect to itself")]
    SelfConnection(String),

    #[error("rooms '{0}' and '{1}' are already connected")]
    DuplicateConnection(String, String),

    #[error("room '{0}' has no neighbors")]
    IsolatedRoom(String),
}
