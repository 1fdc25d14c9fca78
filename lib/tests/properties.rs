use proptest::{collection::vec, prelude::*};
use seedlife_lib::{Config, Encoder, Engine};

proptest! {
    /// The same text and step count always give the same grid.
    #[test]
    fn prop_deterministic(text in ".{0,160}", steps in 0u32..24) {
        let config = Config::new(32, steps);
        prop_assert_eq!(config.generate(&text).unwrap(), config.generate(&text).unwrap());
    }

    /// Zero steps leave any grid unchanged.
    #[test]
    fn prop_zero_steps_identity(size in 1usize..24, bytes in vec(any::<u8>(), 0..80)) {
        let grid = Encoder::new(size).unwrap().encode_bytes(&bytes);
        let engine = Engine::new(size).unwrap();
        prop_assert_eq!(engine.run(grid.clone(), 0).unwrap(), grid);
    }

    /// Evolution never changes the size of the grid.
    #[test]
    fn prop_keeps_size(size in 1usize..24, bytes in vec(any::<u8>(), 0..80), steps in 0u32..8) {
        let grid = Encoder::new(size).unwrap().encode_bytes(&bytes);
        let grid = Engine::new(size).unwrap().run(grid, steps).unwrap();
        prop_assert_eq!(grid.size(), size);
        prop_assert_eq!(grid.iter().count(), size * size);
    }

    /// Running `a` then `b` steps is the same as running `a + b` steps.
    #[test]
    fn prop_steps_compose(bytes in vec(any::<u8>(), 0..128), a in 0u32..6, b in 0u32..6) {
        let engine = Engine::new(32).unwrap();
        let seed = Encoder::new(32).unwrap().encode_bytes(&bytes);
        let split = engine.run(engine.run(seed.clone(), a).unwrap(), b).unwrap();
        prop_assert_eq!(split, engine.run(seed, a + b).unwrap());
    }

    /// Each byte maps to its own 8 cells, most significant bit first.
    #[test]
    fn prop_seed_bits(bytes in vec(any::<u8>(), 128)) {
        let grid = Encoder::new(32).unwrap().encode_bytes(&bytes);
        for ((x, y), state) in grid.iter() {
            let index = y * 32 + x;
            let bit = (bytes[index / 8] >> (7 - index % 8)) & 1 == 1;
            prop_assert_eq!(bool::from(state), bit);
        }
    }
}
