//! Uniform random choice over a slice.

use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one element uniformly at random, independent of earlier picks.
///
/// Repeats are allowed. An empty slice yields `None` rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl RandomSelector {
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.pick_with(items, &mut rand::thread_rng())
    }

    pub fn pick_with<'a, T, R: Rng + ?Sized>(&self, items: &'a [T], rng: &mut R) -> Option<&'a T> {
        items.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn empty_slice_yields_none() {
        let items: [u32; 0] = [];
        assert!(RandomSelector.pick(&items).is_none());
    }

    #[test]
    fn single_element_is_always_picked() {
        let items = ["only"];
        for _ in 0..100 {
            assert_eq!(RandomSelector.pick(&items), Some(&"only"));
        }
    }

    #[test]
    fn picks_are_roughly_uniform() {
        const DRAWS: usize = 10_000;
        let items = [0usize, 1, 2, 3, 4];
        let mut counts = [0usize; 5];
        for _ in 0..DRAWS {
            let picked = RandomSelector.pick(&items).unwrap();
            counts[*picked] += 1;
        }

        // Expected 2000 each; 5 sigma is about 200.
        let expected = DRAWS / items.len();
        for (i, count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < 250,
                "element {i} drawn {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn seeded_rng_reproduces_sequence() {
        let items: Vec<u32> = (0..50).collect();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                RandomSelector.pick_with(&items, &mut a),
                RandomSelector.pick_with(&items, &mut b)
            );
        }
    }
}
