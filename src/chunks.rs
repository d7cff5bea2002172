//! Splitting a sequence into groups.
//!
//! Three mutually exclusive modes:
//! - [`Chunks`]: fixed-size groups, the final group may be shorter
//! - [`ChunkedOn`]: consecutive elements sharing a derived key
//! - [`ChunkedBy`]: consecutive elements joined by a binary predicate
//!
//! All three are single-pass and yield each group as soon as its boundary
//! is seen or the source ends. The key and predicate modes do run-length
//! grouping only; pre-sort the input when full regrouping is wanted.

use crate::error::{SeqError, SeqResult};

// =============================================================================
// Chunks
// =============================================================================

/// Splits the source into consecutive groups of `size` elements.
///
/// The last group may be shorter than `size` if the source length is not a
/// multiple of `size`. Flattening the groups reproduces the source exactly.
///
/// # Performance
///
/// - O(size) per `next()`
/// - O(size) space for the group under construction
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chunks<I> {
    iter: I,
    size: usize,
    done: bool,
}

impl<I> Chunks<I>
where
    I: Iterator,
{
    /// Create a fixed-count chunking iterator.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidChunkSize`] when `size` is zero.
    #[inline]
    pub fn new(iter: I, size: usize) -> SeqResult<Self> {
        if size == 0 {
            return Err(SeqError::invalid_chunk_size(size));
        }
        Ok(Self {
            iter,
            size,
            done: false,
        })
    }
}

impl<I> Iterator for Chunks<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.done {
            return None;
        }

        let mut chunk = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            match self.iter.next() {
                Some(val) => chunk.push(val),
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        if chunk.is_empty() {
            self.done = true;
            None
        } else {
            Some(chunk)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        (lo.div_ceil(self.size), hi.map(|h| h.div_ceil(self.size)))
    }
}

impl<I> std::iter::FusedIterator for Chunks<I> where I: Iterator {}

// =============================================================================
// ChunkedOn
// =============================================================================

/// Groups consecutive elements sharing the same derived key.
///
/// Yields `(key, group)` pairs in encounter order; a new group starts
/// whenever the key changes from the previous element. The input is not
/// sorted, so equal keys separated by a different key produce separate
/// groups.
///
/// # Performance
///
/// - O(group length) per `next()`, one key computation per element
/// - O(group length) space for the group under construction
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChunkedOn<I: Iterator, K, F> {
    iter: I,
    key_fn: F,
    /// Lookahead element that ended the previous group, with its key.
    pending: Option<(K, I::Item)>,
}

impl<I, K, F> ChunkedOn<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    /// Create a key-based chunking iterator.
    #[inline]
    pub fn new(iter: I, key_fn: F) -> Self {
        Self {
            iter,
            key_fn,
            pending: None,
        }
    }
}

impl<I, K, F> Iterator for ChunkedOn<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<(K, Vec<I::Item>)> {
        let (key, first) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                let first = self.iter.next()?;
                let key = (self.key_fn)(&first);
                (key, first)
            }
        };

        let mut group = vec![first];
        for item in self.iter.by_ref() {
            let item_key = (self.key_fn)(&item);
            if item_key == key {
                group.push(item);
            } else {
                self.pending = Some((item_key, item));
                break;
            }
        }

        Some((key, group))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let held = usize::from(self.pending.is_some());
        let lower = usize::from(lo > 0 || held > 0);
        (lower, hi.and_then(|h| h.checked_add(held)))
    }
}

impl<I, K, F> std::iter::FusedIterator for ChunkedOn<I, K, F>
where
    I: Iterator + std::iter::FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
}

// =============================================================================
// ChunkedBy
// =============================================================================

/// Groups consecutive elements for which the predicate holds.
///
/// The predicate receives the last element of the group under construction
/// and the candidate element; a new group starts when it returns false.
///
/// # Performance
///
/// - O(group length) per `next()`, one predicate call per element
/// - O(group length) space for the group under construction
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChunkedBy<I: Iterator, F> {
    iter: I,
    pred: F,
    /// Lookahead element that ended the previous group.
    pending: Option<I::Item>,
}

impl<I, F> ChunkedBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    /// Create a predicate-based chunking iterator.
    #[inline]
    pub fn new(iter: I, pred: F) -> Self {
        Self {
            iter,
            pred,
            pending: None,
        }
    }
}

impl<I, F> Iterator for ChunkedBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let first = match self.pending.take() {
            Some(item) => item,
            None => self.iter.next()?,
        };

        let mut group = vec![first];
        for item in self.iter.by_ref() {
            let joined = (self.pred)(&group[group.len() - 1], &item);
            if joined {
                group.push(item);
            } else {
                self.pending = Some(item);
                break;
            }
        }

        Some(group)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let held = usize::from(self.pending.is_some());
        let lower = usize::from(lo > 0 || held > 0);
        (lower, hi.and_then(|h| h.checked_add(held)))
    }
}

impl<I, F> std::iter::FusedIterator for ChunkedBy<I, F>
where
    I: Iterator + std::iter::FusedIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
}

// =============================================================================
// Tests
// =============================================================================
