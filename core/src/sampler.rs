use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::SampleError;

/// Picks distinct items without replacement, uniformly at random.
///
/// Uses a partial Fisher-Yates shuffle over positions, so two equal values at
/// different positions count as different items.
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: SmallRng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns `k` distinct positions out of `0..len` in random order.
    pub fn sample_indices(&mut self, len: usize, k: usize) -> Result<Vec<usize>, SampleError> {
        if k > len {
            return Err(SampleError::NotEnoughItems {
                requested: k,
                available: len,
            });
        }

        let mut indices: Vec<usize> = (0..len).collect();
        for i in 0..k {
            let j = self.rng.random_range(i..len);
            indices.swap(i, j);
        }
        indices.truncate(k);
        Ok(indices)
    }

    /// Returns `k` items picked from `items`, leaving `items` untouched.
    pub fn sample<T: Clone>(&mut self, items: &[T], k: usize) -> Result<Vec<T>, SampleError> {
        let picked = self.sample_indices(items.len(), k)?;
        log::trace!("sampled positions {:?} of {}", picked, items.len());
        Ok(picked.into_iter().map(|i| items[i].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec;

    #[test]
    fn sample_returns_distinct_members() {
        let items: Vec<u32> = (100..200).collect();

        for seed in 0..50 {
            let picked = Sampler::new(seed).sample(&items, 6).unwrap();

            assert_eq!(picked.len(), 6);
            let unique: BTreeSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 6);
            assert!(picked.iter().all(|item| items.contains(item)));
        }
    }

    #[test]
    fn sample_does_not_mutate_input() {
        let items = vec!["a", "b", "c", "d"];
        let before = items.clone();

        Sampler::new(7).sample(&items, 3).unwrap();

        assert_eq!(items, before);
    }

    #[test]
    fn sample_everything_is_a_permutation() {
        let items = vec![1, 2, 3, 4, 5];

        let mut picked = Sampler::new(3).sample(&items, 5).unwrap();
        picked.sort();

        assert_eq!(picked, items);
    }

    #[test]
    fn sample_zero_is_empty() {
        assert!(Sampler::new(1).sample(&[1, 2, 3], 0).unwrap().is_empty());
        assert!(Sampler::new(1).sample::<u8>(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn sample_too_many_fails_without_padding() {
        let err = Sampler::new(1).sample(&[1, 2, 3], 4).unwrap_err();

        assert_eq!(
            err,
            SampleError::NotEnoughItems {
                requested: 4,
                available: 3
            }
        );
    }

    #[test]
    fn duplicate_values_are_distinct_by_position() {
        let items = vec!["same", "same", "same"];

        let picked = Sampler::new(9).sample_indices(items.len(), 3).unwrap();
        let unique: BTreeSet<_> = picked.iter().collect();

        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn same_seed_same_pick() {
        let items: Vec<u32> = (0..100).collect();

        let a = Sampler::new(42).sample(&items, 6).unwrap();
        let b = Sampler::new(42).sample(&items, 6).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn every_position_can_be_picked_first() {
        let mut seen = BTreeSet::new();
        let mut sampler = Sampler::new(5);

        for _ in 0..500 {
            seen.insert(sampler.sample_indices(6, 1).unwrap()[0]);
        }

        assert_eq!(seen.len(), 6);
    }
}
