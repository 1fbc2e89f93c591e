use rand::Rng;

/// Source of uniform draws for the puzzle builder.
///
/// Any `rand::Rng` works; tests plug in a scripted sequence instead.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is never zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}


#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::scripted::ScriptedSource;
    use super::*;

    #[test]
    fn test_rng_index_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(rng.index(4) < 4);
        }
    }

    #[test]
    fn test_scripted_source_replays_then_zero() {
        let mut source = ScriptedSource::new([2, 5]);
        assert_eq!(source.index(4), 2);
        assert_eq!(source.index(4), 1);
        assert_eq!(source.index(4), 0);
    }
}
