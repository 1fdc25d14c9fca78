//! The rule of the cellular automaton.
//!
//! Only Conway's Game of Life, `B3/S23`, is supported.
//! For the notation, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::cells::{State, ALIVE};

/// The rule string, as shown in the header of a displayed grid.
pub const RULE_STRING: &str = "B3/S23";

/// Neighbor counts that turn a dead cell alive.
const BIRTH: u16 = 1 << 3;

/// Neighbor counts that keep a living cell alive.
const SURVIVAL: u16 = 1 << 2 | 1 << 3;

/// The state of a cell in the next generation, given its current state
/// and the number of its living neighbors.
///
/// A living cell survives iff it has 2 or 3 living neighbors.
/// A dead cell becomes alive iff it has exactly 3 living neighbors.
#[inline]
pub fn transition(state: State, live_neighbors: u8) -> State {
    let mask = if state == ALIVE { SURVIVAL } else { BIRTH };
    State(live_neighbors <= 8 && (mask >> live_neighbors) & 1 == 1)
}
