//! Configuration of a run.

use crate::{
    engine::Engine,
    error::Error,
    grid::BitGrid,
    seed::{Digest, Encoder},
};
use educe::Educe;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of a run.
///
/// The seed grid and the final grid are both generated from this
/// configuration and the input text, and nothing else.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Side length of the grid.
    #[educe(Default = 32)]
    pub size: usize,

    /// Number of generations to evolve the seed.
    #[educe(Default = 5)]
    pub steps: u32,

    /// How to turn the input text into seed bytes.
    pub digest: Digest,
}

impl Config {
    /// Sets up a new configuration with given size and number of steps.
    pub fn new(size: usize, steps: u32) -> Self {
        Config {
            size,
            steps,
            ..Config::default()
        }
    }

    /// Sets the size.
    pub fn set_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the number of steps.
    pub fn set_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the digest.
    pub fn set_digest(mut self, digest: Digest) -> Self {
        self.digest = digest;
        self
    }

    /// Creates the seed encoder.
    /// Returns an error if the size is zero or too large.
    pub fn encoder(&self) -> Result<Encoder, Error> {
        Encoder::new(self.size)
    }

    /// Creates the engine.
    /// Returns an error if the size is zero or too large.
    pub fn engine(&self) -> Result<Engine, Error> {
        Engine::new(self.size)
    }

    /// The seed grid of the text, before any evolution.
    pub fn seed(&self, text: &str) -> Result<BitGrid, Error> {
        Ok(self.encoder()?.encode(text, self.digest))
    }

    /// Seeds a grid from the text and evolves it
    /// [`steps`](#structfield.steps) generations.
    pub fn generate(&self, text: &str) -> Result<BitGrid, Error> {
        debug!(
            "generating a {}x{} grid, {} steps, digest {}, {} bytes of input",
            self.size,
            self.size,
            self.steps,
            self.digest,
            text.len()
        );
        let seed = self.seed(text)?;
        self.engine()?.run(seed, self.steps)
    }
}
