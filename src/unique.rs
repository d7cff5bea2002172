//! First-occurrence deduplication.
//!
//! [`Uniqued`] keeps the first occurrence of each element; [`UniquedOn`]
//! keeps the first element per derived key. Both preserve encounter order
//! and track seen keys in an [`FxHashSet`] for O(1) amortized lookup.

use std::hash::{BuildHasherDefault, Hash};

use rustc_hash::FxHashSet;

// =============================================================================
// Uniqued
// =============================================================================

/// Yields each distinct element once, preserving first-seen order.
///
/// Later duplicates are dropped. The seen set stores a clone of every
/// yielded element.
///
/// # Performance
///
/// - O(1) amortized per `next()` (hash probe)
/// - O(k) space where k = number of distinct elements
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Uniqued<I: Iterator> {
    iter: I,
    seen: FxHashSet<I::Item>,
}

impl<I> Uniqued<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    /// Create a new deduplicating iterator.
    #[inline]
    pub fn new(iter: I) -> Self {
        let (hint, _) = iter.size_hint();
        Self {
            iter,
            seen: FxHashSet::with_capacity_and_hasher(
                hint.min(1024),
                BuildHasherDefault::default(),
            ),
        }
    }
}

impl<I> Iterator for Uniqued<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        loop {
            let val = self.iter.next()?;
            if self.seen.insert(val.clone()) {
                return Some(val);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Can't know how many are duplicates
        (0, self.iter.size_hint().1)
    }
}

impl<I> std::iter::FusedIterator for Uniqued<I>
where
    I: Iterator + std::iter::FusedIterator,
    I::Item: Eq + Hash + Clone,
{
}

// =============================================================================
// UniquedOn
// =============================================================================

/// Yields the first element observed for each distinct key, in original
/// order.
///
/// Every subsequent element whose key has already been seen is dropped.
/// Only the derived keys are stored, not the elements.
///
/// # Performance
///
/// - O(1) amortized per `next()`, one key computation per element
/// - O(k) space where k = number of distinct keys
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct UniquedOn<I, K, F> {
    iter: I,
    key_fn: F,
    seen: FxHashSet<K>,
}

impl<I, K, F> UniquedOn<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    /// Create a new key-based deduplicating iterator.
    #[inline]
    pub fn new(iter: I, key_fn: F) -> Self {
        let (hint, _) = iter.size_hint();
        Self {
            iter,
            key_fn,
            seen: FxHashSet::with_capacity_and_hasher(
                hint.min(1024),
                BuildHasherDefault::default(),
            ),
        }
    }
}

impl<I, K, F> Iterator for UniquedOn<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        loop {
            let val = self.iter.next()?;
            let key = (self.key_fn)(&val);
            if self.seen.insert(key) {
                return Some(val);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Can't know how many keys repeat
        (0, self.iter.size_hint().1)
    }
}

impl<I, K, F> std::iter::FusedIterator for UniquedOn<I, K, F>
where
    I: Iterator + std::iter::FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Uniqued tests
    // =========================================================================

    #[test]
    fn test_uniqued_basic() {
        let result: Vec<i32> = Uniqued::new(vec![1, 2, 1, 3, 2, 4].into_iter()).collect();
        assert_eq!(result, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_uniqued_no_duplicates() {
        let result: Vec<i32> = Uniqued::new(vec![1, 2, 3].into_iter()).collect();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_uniqued_all_duplicates() {
        let result: Vec<i32> = Uniqued::new(vec![5, 5, 5, 5].into_iter()).collect();
        assert_eq!(result, vec![5]);
    }

    #[test]
    fn test_uniqued_empty() {
        let result: Vec<i32> = Uniqued::new(Vec::new().into_iter()).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_uniqued_strings() {
        let words = vec!["red", "green", "red", "blue", "green"];
        let result: Vec<&str> = Uniqued::new(words.into_iter()).collect();
        assert_eq!(result, vec!["red", "green", "blue"]);
    }

    #[test]
    fn test_uniqued_first_occurrence_order() {
        let result: Vec<i32> = Uniqued::new(vec![9, 1, 9, 2, 1, 9, 3].into_iter()).collect();
        assert_eq!(result, vec![9, 1, 2, 3]);
    }

    #[test]
    fn test_uniqued_large() {
        // 0..100 repeated ten times collapses back to 0..100.
        let source: Vec<u32> = (0..10).flat_map(|_| 0..100).collect();
        let result: Vec<u32> = Uniqued::new(source.into_iter()).collect();
        let expected: Vec<u32> = (0..100).collect();
        assert_eq!(result, expected);
    }

    // =========================================================================
    // UniquedOn tests
    // =========================================================================

    #[test]
    fn test_uniqued_on_key() {
        let words = vec!["apple", "avocado", "banana", "cherry", "blueberry"];
        let result: Vec<&str> =
            UniquedOn::new(words.into_iter(), |w| w.chars().next()).collect();
        assert_eq!(result, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_uniqued_on_keeps_first_per_key() {
        let xs = vec![10, 23, 16, 31, 42];
        // Key is the last digit's parity; first even (10) and first odd (23) win.
        let result: Vec<i32> = UniquedOn::new(xs.into_iter(), |&x| x % 2).collect();
        assert_eq!(result, vec![10, 23]);
    }

    #[test]
    fn test_uniqued_on_one_element_per_distinct_key() {
        let xs: Vec<i32> = (0..50).collect();
        let result: Vec<i32> = UniquedOn::new(xs.into_iter(), |&x| x % 7).collect();
        assert_eq!(result, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_uniqued_on_empty() {
        let result: Vec<i32> = UniquedOn::new(Vec::new().into_iter(), |&x: &i32| x).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_uniqued_on_size_hint_upper() {
        let u = UniquedOn::new(0..10, |&x| x);
        assert_eq!(u.size_hint(), (0, Some(10)));
    }

    #[test]
    fn test_uniqued_fused_after_end() {
        let mut u = Uniqued::new(vec![1, 1].into_iter());
        assert_eq!(u.next(), Some(1));
        assert_eq!(u.next(), None);
        assert_eq!(u.next(), None);
    }
}
