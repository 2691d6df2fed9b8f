//! Agents - the hunters and the ghost.
//!
//! Each agent is an explicit state machine. `step` applies one chosen action
//! and returns the resulting state; `tick` picks the action at random; `run`
//! ticks until a terminal state, pausing between ticks.

mod ghost;
mod hunter;

pub use ghost::*;
pub use hunter::*;

use haunt_rules::TickDelay;
use rand::Rng;

/// Sleep a random duration inside `delay`. Only a yield point; nothing is
/// cancelled here.
pub(crate) fn pause<R: Rng + ?Sized>(delay: TickDelay, rng: &mut R) {
    let wait = delay.at(rng.gen());
    if !wait.is_zero() {
        std::thread::sleep(wait);
    }
}
