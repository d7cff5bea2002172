//! Overlapping views over a sequence.
//!
//! [`AdjacentPairs`] yields successive overlapping pairs, holding only the
//! most recently seen element as lookback state. [`Windows`] generalizes it
//! to fixed-size windows over a ring buffer, advancing one element at a
//! time.

use std::collections::VecDeque;

use crate::error::{SeqError, SeqResult};

// =============================================================================
// AdjacentPairs
// =============================================================================

/// Yields successive overlapping pairs from the source.
///
/// `adjacent_pairs([1, 2, 3, 4])` yields `(1, 2), (2, 3), (3, 4)`. A source
/// of length 0 or 1 yields nothing.
///
/// # Performance
///
/// - O(1) per `next()`
/// - O(1) space, stores exactly one previous value
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct AdjacentPairs<I: Iterator> {
    iter: I,
    prev: Option<I::Item>,
    started: bool,
}

impl<I> AdjacentPairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Create a new adjacent-pairs iterator.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            prev: None,
            started: false,
        }
    }
}

impl<I> Iterator for AdjacentPairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    #[inline]
    fn next(&mut self) -> Option<(I::Item, I::Item)> {
        if !self.started {
            self.started = true;
            self.prev = self.iter.next();
        }

        let prev = self.prev.take()?;
        let next = self.iter.next()?;
        self.prev = Some(next.clone());
        Some((prev, next))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let lo = lo.saturating_sub(usize::from(!self.started));
        let hi = hi.map(|h| h.saturating_sub(usize::from(!self.started)));
        (lo, hi)
    }
}

impl<I> std::iter::FusedIterator for AdjacentPairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

// =============================================================================
// Windows
// =============================================================================

/// Yields overlapping windows of a fixed size, advancing by one element.
///
/// `windows_of([1, 2, 3, 4], 3)` yields `[1, 2, 3]`, `[2, 3, 4]`. A source
/// shorter than the window size yields nothing.
///
/// # Performance
///
/// - O(size) per `next()` for the window snapshot
/// - O(size) space for the ring buffer
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Windows<I: Iterator> {
    iter: I,
    window: VecDeque<I::Item>,
    size: usize,
    done: bool,
}

impl<I> Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Create a sliding window of `size` elements over `iter`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidWindowSize`] when `size` is zero.
    #[inline]
    pub fn new(iter: I, size: usize) -> SeqResult<Self> {
        if size == 0 {
            return Err(SeqError::invalid_window_size(size));
        }
        Ok(Self {
            iter,
            window: VecDeque::with_capacity(size),
            size,
            done: false,
        })
    }
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.done {
            return None;
        }

        if self.window.len() < self.size {
            // Fill the initial window
            while self.window.len() < self.size {
                match self.iter.next() {
                    Some(val) => self.window.push_back(val),
                    None => {
                        // Source shorter than one window
                        self.done = true;
                        self.window.clear();
                        return None;
                    }
                }
            }
        } else {
            // Slide: pop front, push back
            let Some(val) = self.iter.next() else {
                self.done = true;
                return None;
            };
            self.window.pop_front();
            self.window.push_back(val);
        }

        Some(self.window.iter().cloned().collect())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        if self.window.len() == self.size {
            // One window per remaining source element.
            (lo, hi)
        } else {
            let lower = lo.saturating_add(1).saturating_sub(self.size);
            let upper = hi
                .and_then(|h| h.checked_add(1))
                .map(|h| h.saturating_sub(self.size));
            (lower, upper)
        }
    }
}

impl<I> std::iter::FusedIterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

// =============================================================================
// Tests
// =============================================================================
