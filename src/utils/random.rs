// Mon Oct 19 2026 - Alex

use crate::utils::math::MathUtils;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub struct RandomUtils;

impl RandomUtils {
    /// High-entropy seed from the thread-local OS-seeded generator.
    pub fn entropy_seed() -> u64 {
        rand::random::<u64>()
    }

    pub fn create_rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    /// Independent generator for one worker, derived from the run's base seed.
    pub fn rng_for(base_seed: u64, index: u64) -> SmallRng {
        Self::create_rng(MathUtils::mix_seed(base_seed, index))
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
        let n = slice.len();
        if n <= 1 {
            return;
        }
        for i in (1..n).rev() {
            let j = rng.random_range(0..=i);
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomUtils::rng_for(99, 3);
        let mut b = RandomUtils::rng_for(99, 3);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_different_index_different_sequence() {
        let mut a = RandomUtils::rng_for(99, 3);
        let mut b = RandomUtils::rng_for(99, 4);
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut values: Vec<u32> = (0..50).collect();
        let mut rng = RandomUtils::create_rng(5);
        RandomUtils::shuffle(&mut values, &mut rng);
        values.sort();
        assert_eq!(values, (0..50).collect::<Vec<u32>>());
    }
}
