//! Evolving a grid on a torus.

use crate::{
    cells::{Coord, ALIVE},
    error::Error,
    grid::{cell_total, BitGrid},
    rule::transition,
};
use log::trace;

/// Offsets of the eight neighbors.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight neighbors of a cell on a torus of the given size.
fn wrapped_nbhd(size: usize, (x, y): Coord) -> [Coord; 8] {
    let size = size as isize;
    let mut nbhd = [(0, 0); 8];
    for (i, (dx, dy)) in NBHD.iter().enumerate() {
        let nx = (x as isize + dx).rem_euclid(size) as usize;
        let ny = (y as isize + dy).rem_euclid(size) as usize;
        nbhd[i] = (nx, ny);
    }
    nbhd
}

/// Runs Conway's Game of Life on a torus of a fixed size.
///
/// The left edge is glued to the right edge and the top edge to the
/// bottom edge, so every cell has exactly eight neighbors.
///
/// Each generation is computed into a fresh grid from the complete
/// previous one. An engine never changes after construction, so it
/// can be shared between threads and reused for any number of runs.
#[derive(Clone, Debug)]
pub struct Engine {
    /// Side length of the grids it accepts.
    size: usize,

    /// For each cell, the indices of its eight neighbors.
    nbhd: Box<[[usize; 8]]>,
}

impl Engine {
    /// Creates an engine for grids of the given size.
    ///
    /// All cells are linked to their neighbors here.
    pub fn new(size: usize) -> Result<Self, Error> {
        let mut nbhd = Vec::with_capacity(cell_total(size)?);
        for y in 0..size {
            for x in 0..size {
                let mut links = [0; 8];
                for (link, (nx, ny)) in links.iter_mut().zip(wrapped_nbhd(size, (x, y))) {
                    *link = ny * size + nx;
                }
                nbhd.push(links);
            }
        }
        Ok(Engine {
            size,
            nbhd: nbhd.into_boxed_slice(),
        })
    }

    /// Side length of the grids it accepts.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Makes sure that the grid has the size of the engine.
    fn check(&self, grid: &BitGrid) -> Result<(), Error> {
        if grid.size() == self.size {
            Ok(())
        } else {
            Err(Error::SizeMismatch {
                expected: self.size,
                found: grid.size(),
            })
        }
    }

    /// The coordinates of the eight neighbors of a cell.
    ///
    /// On grids of size 1 or 2 some of them coincide,
    /// and may be the cell itself.
    pub fn neighbors(&self, coord: Coord) -> Result<[Coord; 8], Error> {
        if coord.0 >= self.size || coord.1 >= self.size {
            return Err(Error::OutOfBounds(coord));
        }
        Ok(wrapped_nbhd(self.size, coord))
    }

    /// Number of living neighbors of a cell, between 0 and 8.
    pub fn count_neighbors(&self, grid: &BitGrid, coord: Coord) -> Result<u8, Error> {
        self.check(grid)?;
        let (x, y) = coord;
        if x >= self.size || y >= self.size {
            return Err(Error::OutOfBounds(coord));
        }
        Ok(self.count_at(grid, y * self.size + x))
    }

    #[inline]
    fn count_at(&self, grid: &BitGrid, index: usize) -> u8 {
        self.nbhd[index]
            .iter()
            .filter(|&&i| grid.cells[i] == ALIVE)
            .count() as u8
    }

    /// One generation, without checking the size.
    fn step(&self, grid: &BitGrid) -> BitGrid {
        let cells = grid
            .cells
            .iter()
            .enumerate()
            .map(|(i, &state)| transition(state, self.count_at(grid, i)))
            .collect();
        BitGrid {
            size: self.size,
            cells,
        }
    }

    /// Computes the next generation.
    ///
    /// Returns a new grid; the given one is left untouched.
    pub fn evolve(&self, grid: &BitGrid) -> Result<BitGrid, Error> {
        self.check(grid)?;
        Ok(self.step(grid))
    }

    /// Applies [`evolve`](Self::evolve) exactly `steps` times.
    ///
    /// With `steps == 0` the grid is returned as is. The run never stops
    /// early, even when the pattern has become stable or periodic.
    pub fn run(&self, grid: BitGrid, steps: u32) -> Result<BitGrid, Error> {
        self.check(&grid)?;
        let grid = (0..steps).fold(grid, |grid, _| self.step(&grid));
        trace!(
            "ran {} generations on a {}x{} torus, {} cells alive",
            steps,
            self.size,
            self.size,
            grid.cell_count()
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::DEAD;

    #[test]
    fn neighbor_table_matches_wrapping() -> Result<(), Error> {
        let engine = Engine::new(5)?;
        for y in 0..5 {
            for x in 0..5 {
                let coords = engine.neighbors((x, y))?;
                let indices: Vec<usize> = coords.iter().map(|&(nx, ny)| ny * 5 + nx).collect();
                assert_eq!(indices, engine.nbhd[y * 5 + x].to_vec());
            }
        }
        Ok(())
    }

    #[test]
    fn tiny_torus() -> Result<(), Error> {
        // On a 1x1 torus the only cell is its own eight neighbors.
        let engine = Engine::new(1)?;
        let mut grid = BitGrid::new(1)?;
        grid.set_cell((0, 0), ALIVE)?;
        assert_eq!(engine.count_neighbors(&grid, (0, 0))?, 8);
        assert_eq!(engine.evolve(&grid)?.get_cell_state((0, 0))?, DEAD);

        // On a 2x2 torus each other cell is counted twice or four times.
        let engine = Engine::new(2)?;
        let mut grid = BitGrid::new(2)?;
        grid.set_cell((1, 1), ALIVE)?;
        assert_eq!(engine.count_neighbors(&grid, (0, 0))?, 4);
        assert_eq!(engine.count_neighbors(&grid, (1, 0))?, 2);
        assert_eq!(engine.count_neighbors(&grid, (1, 1))?, 0);
        Ok(())
    }

    #[test]
    fn out_of_bounds() -> Result<(), Error> {
        let engine = Engine::new(4)?;
        let grid = BitGrid::new(4)?;
        assert_eq!(engine.neighbors((4, 0)), Err(Error::OutOfBounds((4, 0))));
        assert_eq!(
            engine.count_neighbors(&grid, (0, 9)),
            Err(Error::OutOfBounds((0, 9)))
        );
        Ok(())
    }
}
