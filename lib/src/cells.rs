//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// The automaton is binary, so a cell is either [`DEAD`] or [`ALIVE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub bool);

/// The Dead state.
pub const DEAD: State = State(false);
/// The Alive state.
pub const ALIVE: State = State(true);

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        State(alive)
    }
}

impl From<State> for bool {
    #[inline]
    fn from(state: State) -> Self {
        state.0
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, i.e., `(column, row)`.
/// Both coordinates are 0-indexed.
pub type Coord = (usize, usize);
