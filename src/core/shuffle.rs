//! # Fisher–Yates shuffle.
//!
//! [`shuffle`] draws a uniformly random permutation from an injected random
//! source. It moves whole items and emits no events: shuffling prepares a run,
//! it is not part of one.
//!
//! ```text
//! for i in (1..n).rev():
//!   j = uniform(0..=i)
//!   swap(i, j)
//! ```

use rand::Rng;

/// Shuffles `items` in place using `rng`.
///
/// Sequences of length 0 or 1 are left untouched. Seeding `rng` makes the
/// permutation reproducible.
///
/// # Example
/// ```rust
/// use rand::{SeedableRng, rngs::StdRng};
/// use sortvisor::shuffle;
///
/// let mut a: Vec<u32> = (0..10).collect();
/// let mut b = a.clone();
/// shuffle(&mut a, &mut StdRng::seed_from_u64(42));
/// shuffle(&mut b, &mut StdRng::seed_from_u64(42));
/// assert_eq!(a, b);
/// ```
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::test_support::{assert_pairing, items, values};

    #[test]
    fn test_same_seed_same_permutation() {
        let mut a = items(&(0..32).collect::<Vec<_>>());
        let mut b = items(&(0..32).collect::<Vec<_>>());
        shuffle(&mut a, &mut StdRng::seed_from_u64(9));
        shuffle(&mut b, &mut StdRng::seed_from_u64(9));
        assert_eq!(values(&a), values(&b));
    }

    #[test]
    fn test_is_permutation_and_keeps_pairing() {
        let mut seq = items(&(0..50).collect::<Vec<_>>());
        shuffle(&mut seq, &mut StdRng::seed_from_u64(1));

        let mut sorted = values(&seq);
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_pairing(&seq);
    }

    #[test]
    fn test_tiny_inputs_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![7u8];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn test_all_permutations_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(0xfeed);
        let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
        for _ in 0..6000 {
            let mut v = [0u8, 1, 2];
            shuffle(&mut v, &mut rng);
            *counts.entry(v).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, n) in counts {
            assert!((800..=1200).contains(&n), "permutation {perm:?} drawn {n} times");
        }
    }
}
