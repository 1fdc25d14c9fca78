//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Grid size should be positive.
    NonPositiveError,
    /// Grid size {0} is too large.
    SizeTooLarge(usize),
    /// The grid is not square: a row has {width} cells but there are {height} rows.
    NonSquareGrid {
        /// Length of the offending row.
        width: usize,
        /// Number of rows.
        height: usize,
    },
    /// The grid has size {found}, but the engine expects size {expected}.
    SizeMismatch {
        /// Size the engine was built for.
        expected: usize,
        /// Size of the grid that was passed in.
        found: usize,
    },
    /// Cell at {0:?} is outside the grid.
    OutOfBounds(Coord),
    /// Invalid digest: {0:?}.
    ParseDigestError(String),
    /// Invalid grid: {0}.
    ParseGridError(String),
}
