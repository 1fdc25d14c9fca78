//! The square grid of cells.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
    rule::RULE_STRING,
};
use std::{
    fmt::{self, Debug, Display, Formatter, Write},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of cells on a grid of the given size.
///
/// Fails when the size is zero, or when the cells cannot be counted in a `usize`.
pub(crate) fn cell_total(size: usize) -> Result<usize, Error> {
    if size == 0 {
        return Err(Error::NonPositiveError);
    }
    size.checked_mul(size).ok_or(Error::SizeTooLarge(size))
}

/// A square grid of binary cells.
///
/// The grid is always exactly `size × size`, with `size >= 1`.
/// Cells are stored row by row.
///
/// The grid itself has no edges: [`get_wrapped`](Self::get_wrapped)
/// takes coordinates modulo the size on both axes, which is how the
/// engine sees it.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "GridSer", into = "GridSer")
)]
pub struct BitGrid {
    /// Side length.
    pub(crate) size: usize,

    /// States of all cells, in row-major order.
    ///
    /// The length is always `size * size`.
    pub(crate) cells: Box<[State]>,
}

impl BitGrid {
    /// Creates a grid of dead cells with the given size.
    pub fn new(size: usize) -> Result<Self, Error> {
        cell_total(size)?;
        Ok(Self::dead(size))
    }

    /// Creates a grid of dead cells without checking the size.
    pub(crate) fn dead(size: usize) -> Self {
        BitGrid {
            size,
            cells: vec![DEAD; size * size].into_boxed_slice(),
        }
    }

    /// Creates a grid from rows of booleans, `true` meaning alive.
    ///
    /// Every row must have exactly as many cells as there are rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, Error> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::NonPositiveError);
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(Error::NonSquareGrid {
                    width: row.len(),
                    height: size,
                });
            }
            cells.extend(row.iter().map(|&alive| State(alive)));
        }
        Ok(BitGrid {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of a cell in [`cells`](#structfield.cells).
    fn index(&self, coord: Coord) -> Result<usize, Error> {
        let (x, y) = coord;
        if x < self.size && y < self.size {
            Ok(y * self.size + x)
        } else {
            Err(Error::OutOfBounds(coord))
        }
    }

    /// Gets the state of a cell.
    pub fn get_cell_state(&self, coord: Coord) -> Result<State, Error> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets the state of a cell.
    pub fn set_cell(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        let i = self.index(coord)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Gets the state of a cell, with both coordinates taken modulo the size.
    ///
    /// So `(-1, -1)` is the bottom right corner.
    pub fn get_wrapped(&self, x: isize, y: isize) -> State {
        let size = self.size as isize;
        let x = x.rem_euclid(size) as usize;
        let y = y.rem_euclid(size) as usize;
        self.cells[y * self.size + x]
    }

    /// Number of living cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&state| state == ALIVE).count()
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, State)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| ((i % size, i / size), state))
    }

    /// The grid as rows of booleans, `true` meaning alive.
    ///
    /// This is the shape handed to a renderer.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|&state| state.into()).collect())
            .collect()
    }
}

/// Displays the grid in a mix of
/// [Plaintext](https://conwaylife.com/wiki/Plaintext) and
/// [RLE](https://conwaylife.com/wiki/Rle) format.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`;
/// * Each line is ended with `$`;
/// * The whole pattern is ended with `!`.
impl Display for BitGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "x = {}, y = {}, rule = {}",
            self.size, self.size, RULE_STRING
        )?;
        for (y, row) in self.cells.chunks(self.size).enumerate() {
            for &state in row.iter() {
                f.write_char(if state == ALIVE { 'o' } else { '.' })?;
            }
            if y == self.size - 1 {
                f.write_str("!\n")?;
            } else {
                f.write_str("$\n")?;
            }
        }
        Ok(())
    }
}

impl Debug for BitGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitGrid({})\n{}", self.size, self)
    }
}

/// Parses the format produced by [`Display`].
///
/// The `x = .., y = .., rule = ..` header and the line endings `$` and `!`
/// are optional. `o`, `O` and `A` are all read as living cells.
impl FromStr for BitGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') || line.starts_with("x =") {
                continue;
            }
            let line = line.trim_end_matches(|c: char| c == '$' || c == '!');
            let row = line
                .chars()
                .map(|c| match c {
                    '.' => Ok(false),
                    'o' | 'O' | 'A' => Ok(true),
                    c => Err(Error::ParseGridError(format!(
                        "unexpected character {:?}",
                        c
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        BitGrid::from_rows(&rows)
    }
}

/// A representation of the grid which can be easily serialized.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct GridSer {
    /// Side length.
    size: usize,

    /// One string per row, `.` for dead cells and `o` for living cells.
    rows: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<BitGrid> for GridSer {
    fn from(grid: BitGrid) -> Self {
        let rows = grid
            .cells
            .chunks(grid.size)
            .map(|row| {
                row.iter()
                    .map(|&state| if state == ALIVE { 'o' } else { '.' })
                    .collect()
            })
            .collect();
        GridSer {
            size: grid.size,
            rows,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridSer> for BitGrid {
    type Error = Error;

    fn try_from(ser: GridSer) -> Result<Self, Self::Error> {
        let grid: BitGrid = ser.rows.join("\n").parse()?;
        if grid.size != ser.size {
            return Err(Error::SizeMismatch {
                expected: ser.size,
                found: grid.size,
            });
        }
        Ok(grid)
    }
}
