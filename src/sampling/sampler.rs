//! Random distinct sampling of schedule candidates.
//!
//! Draws up to a caller-supplied limit of distinct tuples uniformly from
//! the cartesian product of the candidate lists without materializing it:
//! a uniform index subset of `[0, N)` is drawn first (cost proportional
//! to the draw count, not to N), then each index is decoded through the
//! mixed-radix mapper as the iterator is consumed.
//!
//! The randomness source is owned by the caller. Concurrent requests use
//! independent generators, and tests seed a `SmallRng` for reproducible
//! draws.
//!
//! # Reference
//! Bentley & Floyd (1987), "Programming Pearls: A Sample of Brilliance"
//! (sampling a random subset in time proportional to its size)

use rand::Rng;
use rand::seq::index;

use super::product::{ProductSpace, SamplingError};

/// Default cap on the number of candidates drawn per generation request.
pub const DEFAULT_SCHEDULE_LIMIT: usize = 100_000;

/// Draws up to `limit` distinct random candidate tuples from the product
/// of `lists`.
///
/// Every tuple of the product is equally likely to be among those drawn,
/// and no tuple is drawn twice. The iterator yields exactly
/// `min(N, limit)` tuples, where N is the product of the list lengths;
/// it is empty if no lists are given, any list is empty, or `limit` is
/// zero — none of these are errors. Construction fails only if N
/// overflows `usize`.
///
/// Each yielded tuple holds one reference per list, in input order. The
/// iterator is finite and not restartable; reproducing its output
/// requires an identically seeded `rng`.
pub fn sample<'a, T, R>(
    lists: &'a [Vec<T>],
    limit: usize,
    rng: &mut R,
) -> Result<ScheduleCandidates<'a, T>, SamplingError>
where
    R: Rng + ?Sized,
{
    let lengths: Vec<usize> = lists.iter().map(Vec::len).collect();
    let space = ProductSpace::new(&lengths)?;
    let amount = space.len().min(limit);
    let indices = index::sample(rng, space.len(), amount).into_iter();
    Ok(ScheduleCandidates {
        space,
        lists,
        indices,
    })
}

/// Lazy iterator over distinct schedule candidates, produced by [`sample`].
#[derive(Debug)]
pub struct ScheduleCandidates<'a, T> {
    space: ProductSpace,
    lists: &'a [Vec<T>],
    indices: index::IndexVecIntoIter,
}

impl<T> ScheduleCandidates<'_, T> {
    /// Total number of tuples in the underlying product space.
    ///
    /// The iterator itself yields `min(space_size, limit)` tuples.
    pub fn space_size(&self) -> usize {
        self.space.len()
    }
}

impl<'a, T> Iterator for ScheduleCandidates<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        let choices = self.space.decode(index);
        Some(
            choices
                .iter()
                .zip(self.lists)
                .map(|(&choice, list)| &list[choice])
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<T> ExactSizeIterator for ScheduleCandidates<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn test_small_space_fully_covered() {
        let lists = vec![vec!["A", "B"], vec!["X", "Y", "Z"]];
        let mut rng = SmallRng::seed_from_u64(42);

        let candidates: Vec<Vec<&&str>> = sample(&lists, 100, &mut rng).unwrap().collect();
        assert_eq!(candidates.len(), 6);

        let unique: HashSet<Vec<&str>> = candidates
            .iter()
            .map(|tuple| tuple.iter().map(|&&s| s).collect())
            .collect();
        assert_eq!(unique.len(), 6, "all six pairs must appear exactly once");
        for first in ["A", "B"] {
            for second in ["X", "Y", "Z"] {
                assert!(unique.contains(&vec![first, second]));
            }
        }
    }

    #[test]
    fn test_limit_caps_draw_count() {
        let lists = vec![
            (0..10).collect::<Vec<i32>>(),
            (0..10).collect(),
            (0..10).collect(),
        ];
        let mut rng = SmallRng::seed_from_u64(7);

        let candidates = sample(&lists, 50, &mut rng).unwrap();
        assert_eq!(candidates.space_size(), 1000);
        assert_eq!(candidates.len(), 50);

        let drawn: Vec<Vec<&i32>> = candidates.collect();
        assert_eq!(drawn.len(), 50);

        let unique: HashSet<Vec<i32>> = drawn
            .iter()
            .map(|tuple| tuple.iter().map(|&&v| v).collect())
            .collect();
        assert_eq!(unique.len(), 50, "draws must be distinct");
    }

    #[test]
    fn test_elements_come_from_their_own_list() {
        let lists = vec![vec![1, 2, 3], vec![10, 20], vec![100]];
        let mut rng = SmallRng::seed_from_u64(3);

        for tuple in sample(&lists, 1000, &mut rng).unwrap() {
            assert_eq!(tuple.len(), 3);
            assert!(lists[0].contains(tuple[0]));
            assert!(lists[1].contains(tuple[1]));
            assert!(lists[2].contains(tuple[2]));
        }
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        let lists = vec![vec![1], vec![], vec![3]];
        let mut rng = SmallRng::seed_from_u64(0);

        let mut candidates = sample(&lists, 100, &mut rng).unwrap();
        assert_eq!(candidates.len(), 0);
        assert!(candidates.next().is_none());
    }

    #[test]
    fn test_no_lists_yields_nothing() {
        let lists: Vec<Vec<i32>> = Vec::new();
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(sample(&lists, 100, &mut rng).unwrap().count(), 0);
    }

    #[test]
    fn test_zero_limit_yields_nothing() {
        let lists = vec![vec![1, 2], vec![3, 4]];
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(sample(&lists, 0, &mut rng).unwrap().count(), 0);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let lists = vec![(0..50).collect::<Vec<i32>>(), (0..50).collect()];

        let mut rng_a = SmallRng::seed_from_u64(99);
        let mut rng_b = SmallRng::seed_from_u64(99);

        let a: Vec<Vec<&i32>> = sample(&lists, 20, &mut rng_a).unwrap().collect();
        let b: Vec<Vec<&i32>> = sample(&lists, 20, &mut rng_b).unwrap().collect();
        assert_eq!(a, b);
    }
}
