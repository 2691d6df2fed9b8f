//! # Haunt Rules
//!
//! The rulebook for the haunted-house investigation: evidence kinds and their
//! supernatural bands, ghost archetypes, agent counters, build-time constants
//! and house layouts. This crate holds no threads and does no I/O; the
//! simulation itself lives in `haunt_core`.

pub mod config;
pub mod entities;
pub mod error;
pub mod layout;
pub mod mechanics;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use layout::*;
pub use mechanics::*;
