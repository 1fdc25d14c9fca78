//! Deterministic Game of Life art from text.
//!
//! The bytes of the input text (or of its digest) are laid out on a
//! square grid, one bit per cell, and the grid is then evolved under
//! Conway's Game of Life on a torus.
//!
//! ```
//! use seedlife_lib::{Config, Digest};
//!
//! let config = Config::new(32, 10).set_digest(Digest::Sha3_512);
//! let grid = config.generate("PF 2025").unwrap();
//! assert_eq!(grid.size(), 32);
//! ```

mod cells;
mod config;
mod engine;
mod error;
mod grid;
pub mod rule;
mod seed;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::Config;
pub use engine::Engine;
pub use error::Error;
pub use grid::BitGrid;
pub use seed::{Digest, Encoder};
