//! Method-chaining surface for the adapter set.

use std::hash::Hash;

use rand::Rng;

use crate::chain::Chain;
use crate::chunks::{ChunkedBy, ChunkedOn, Chunks};
use crate::compact::Compacted;
use crate::error::SeqResult;
use crate::product::Product;
use crate::sample;
use crate::stride::Stride;
use crate::unique::{Uniqued, UniquedOn};
use crate::windows::{AdjacentPairs, Windows};

/// Extension methods over every sized iterator.
///
/// Blanket-implemented, so bringing the trait into scope is enough:
///
/// ```
/// use seqtools::SeqTools;
///
/// let kept: Vec<i32> = (0..=10).striding(2)?.collect();
/// assert_eq!(kept, vec![0, 2, 4, 6, 8, 10]);
/// # Ok::<(), seqtools::SeqError>(())
/// ```
pub trait SeqTools: Iterator + Sized {
    /// Append `other` after this iterator, resolving positional access
    /// per side.
    ///
    /// See [`Chain`].
    #[inline]
    fn chain_seq<B>(self, other: B) -> Chain<Self, B::IntoIter>
    where
        B: IntoIterator<Item = Self::Item>,
    {
        Chain::new(self, other.into_iter())
    }

    /// Keep every `step`-th element, starting with the first.
    ///
    /// See [`Stride`].
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidStep`](crate::SeqError::InvalidStep)
    /// when `step` is zero.
    #[inline]
    fn striding(self, step: usize) -> SeqResult<Stride<Self>> {
        Stride::new(self, step)
    }

    /// Yield successive overlapping pairs.
    ///
    /// See [`AdjacentPairs`].
    #[inline]
    fn adjacent_pairs(self) -> AdjacentPairs<Self>
    where
        Self::Item: Clone,
    {
        AdjacentPairs::new(self)
    }

    /// Yield overlapping windows of `size` elements, advancing by one.
    ///
    /// See [`Windows`].
    ///
    /// # Errors
    ///
    /// Returns
    /// [`SeqError::InvalidWindowSize`](crate::SeqError::InvalidWindowSize)
    /// when `size` is zero.
    #[inline]
    fn windows_of(self, size: usize) -> SeqResult<Windows<Self>>
    where
        Self::Item: Clone,
    {
        Windows::new(self, size)
    }

    /// Split into consecutive groups of `size` elements; the last group
    /// may be shorter.
    ///
    /// See [`Chunks`].
    ///
    /// # Errors
    ///
    /// Returns
    /// [`SeqError::InvalidChunkSize`](crate::SeqError::InvalidChunkSize)
    /// when `size` is zero.
    #[inline]
    fn chunks_of(self, size: usize) -> SeqResult<Chunks<Self>> {
        Chunks::new(self, size)
    }

    /// Group consecutive elements sharing the same derived key, yielding
    /// `(key, group)` pairs.
    ///
    /// See [`ChunkedOn`].
    #[inline]
    fn chunked_on<K, F>(self, key_fn: F) -> ChunkedOn<Self, K, F>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        ChunkedOn::new(self, key_fn)
    }

    /// Group consecutive elements for which `pred(prev, curr)` holds.
    ///
    /// See [`ChunkedBy`].
    #[inline]
    fn chunked_by<F>(self, pred: F) -> ChunkedBy<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        ChunkedBy::new(self, pred)
    }

    /// Drop later duplicates, keeping first occurrences in order.
    ///
    /// See [`Uniqued`].
    #[inline]
    fn uniqued(self) -> Uniqued<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        Uniqued::new(self)
    }

    /// Drop elements whose derived key has already been seen.
    ///
    /// See [`UniquedOn`].
    #[inline]
    fn uniqued_on<K, F>(self, key_fn: F) -> UniquedOn<Self, K, F>
    where
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        UniquedOn::new(self, key_fn)
    }

    /// Flatten a sequence of optionals down to its present values.
    ///
    /// See [`Compacted`].
    #[inline]
    fn compacted<T>(self) -> Compacted<Self>
    where
        Self: Iterator<Item = Option<T>>,
    {
        Compacted::new(self)
    }

    /// Pair every element with every element of `other`, row-major.
    ///
    /// See [`Product`].
    #[inline]
    fn cartesian_product<B>(self, other: B) -> Product<Self, B::IntoIter>
    where
        B: IntoIterator,
        B::IntoIter: Clone,
    {
        Product::new(self, other.into_iter())
    }

    /// Select `count` elements uniformly at random, in randomized order.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`SeqError::SampleTooLarge`](crate::SeqError::SampleTooLarge) when
    /// the source produces fewer than `count` elements.
    fn random_sample(self, count: usize) -> SeqResult<Vec<Self::Item>> {
        sample::random_sample(self, count)
    }

    /// Select `count` elements uniformly at random using `rng`, in
    /// randomized order.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`SeqError::SampleTooLarge`](crate::SeqError::SampleTooLarge) when
    /// the source produces fewer than `count` elements.
    fn random_sample_with<R>(self, count: usize, rng: &mut R) -> SeqResult<Vec<Self::Item>>
    where
        R: Rng + ?Sized,
    {
        sample::random_sample_with(self, count, rng)
    }

    /// Select `count` elements uniformly at random, preserving their
    /// original relative order.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`SeqError::SampleTooLarge`](crate::SeqError::SampleTooLarge) when
    /// the source produces fewer than `count` elements.
    fn random_stable_sample(self, count: usize) -> SeqResult<Vec<Self::Item>> {
        sample::random_stable_sample(self, count)
    }

    /// Select `count` elements uniformly at random using `rng`, preserving
    /// their original relative order.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`SeqError::SampleTooLarge`](crate::SeqError::SampleTooLarge) when
    /// the source produces fewer than `count` elements.
    fn random_stable_sample_with<R>(
        self,
        count: usize,
        rng: &mut R,
    ) -> SeqResult<Vec<Self::Item>>
    where
        R: Rng + ?Sized,
    {
        sample::random_stable_sample_with(self, count, rng)
    }
}

impl<I: Iterator> SeqTools for I {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ext_chain_seq() {
        let result: Vec<i32> = vec![1, 2].into_iter().chain_seq(vec![3, 4]).collect();
        assert_eq!(result, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ext_striding() {
        let result: Vec<i32> = (0..=10).striding(2).unwrap().collect();
        assert_eq!(result, vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_ext_adjacent_pairs() {
        let result: Vec<(i32, i32)> = (1..=3).adjacent_pairs().collect();
        assert_eq!(result, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_ext_windows_of() {
        let result: Vec<Vec<i32>> = (1..=4).windows_of(2).unwrap().collect();
        assert_eq!(result, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
    }

    #[test]
    fn test_ext_chunks_of() {
        let result: Vec<Vec<i32>> = (1..=5).chunks_of(2).unwrap().collect();
        assert_eq!(result, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_ext_chunked_on() {
        let groups: Vec<(bool, Vec<i32>)> =
            vec![2, 4, 1, 3, 6].into_iter().chunked_on(|&x| x % 2 == 0).collect();
        assert_eq!(
            groups,
            vec![(true, vec![2, 4]), (false, vec![1, 3]), (true, vec![6])]
        );
    }

    #[test]
    fn test_ext_chunked_by() {
        let groups: Vec<Vec<i32>> = vec![1, 2, 2, 3]
            .into_iter()
            .chunked_by(|a, b| a == b)
            .collect();
        assert_eq!(groups, vec![vec![1], vec![2, 2], vec![3]]);
    }

    #[test]
    fn test_ext_uniqued() {
        let result: Vec<i32> = vec![1, 2, 1, 3].into_iter().uniqued().collect();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_ext_uniqued_on() {
        let result: Vec<i32> = vec![10, 20, 11, 31].into_iter().uniqued_on(|&x| x % 10).collect();
        assert_eq!(result, vec![10, 11]);
    }

    #[test]
    fn test_ext_compacted() {
        let result: Vec<i32> = vec![Some(1), None, Some(2)].into_iter().compacted().collect();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_ext_cartesian_product() {
        let pairs: Vec<(i32, i32)> = (0..2).cartesian_product(0..2).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_ext_random_sample_with() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(3);
        let sample = (0..100).random_sample_with(10, &mut rng).unwrap();
        assert_eq!(sample.len(), 10);
    }

    #[test]
    fn test_ext_random_stable_sample_with() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(5);
        let sample = (0..100).random_stable_sample_with(10, &mut rng).unwrap();
        for pair in sample.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_ext_pipeline_composes() {
        // Strided readings, deduplicated, then paired for deltas.
        let deltas: Vec<i32> = vec![0, 9, 2, 9, 4, 9, 6, 9, 8, 9]
            .into_iter()
            .striding(2)
            .unwrap()
            .uniqued()
            .adjacent_pairs()
            .map(|(a, b)| b - a)
            .collect();
        assert_eq!(deltas, vec![2, 2, 2, 2]);
    }
}
