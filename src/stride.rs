//! Every-Nth-element re-sampling.
//!
//! [`Stride`] walks its source once, yielding the elements at positions
//! `0, step, 2*step, ...` and discarding the rest without buffering them.

use crate::error::{SeqError, SeqResult};

// =============================================================================
// Stride
// =============================================================================

/// Yields every `step`-th element of the source, starting with the first.
///
/// # Performance
///
/// - O(step) source pulls per yielded element
/// - O(1) space overhead
/// - `size_hint()` is the ceiling division of the source hint by `step`
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Stride<I> {
    iter: I,
    /// Next source position to yield.
    next_yield: usize,
    /// Step between yields. Always at least 1.
    step: usize,
    /// Current position in the source iterator.
    pos: usize,
    /// Whether the source ran dry.
    done: bool,
}

impl<I> Stride<I>
where
    I: Iterator,
{
    /// Create a stride over `iter`, yielding every `step`-th element.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidStep`] when `step` is zero.
    #[inline]
    pub fn new(iter: I, step: usize) -> SeqResult<Self> {
        if step == 0 {
            return Err(SeqError::invalid_step(step));
        }
        Ok(Self {
            iter,
            next_yield: 0,
            step,
            pos: 0,
            done: false,
        })
    }

    /// The configured step.
    #[inline]
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }
}

impl<I> Iterator for Stride<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }

        // Skip elements until we reach next_yield
        while self.pos < self.next_yield {
            if self.iter.next().is_none() {
                self.done = true;
                return None;
            }
            self.pos += 1;
        }

        let Some(val) = self.iter.next() else {
            self.done = true;
            return None;
        };
        self.pos += 1;
        self.next_yield = self.next_yield.saturating_add(self.step);
        Some(val)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Elements still to skip before the next yield.
        let gap = self.next_yield - self.pos;
        let (lo, hi) = self.iter.size_hint();
        let lower = lo.saturating_sub(gap).div_ceil(self.step);
        let upper = hi.map(|h| h.saturating_sub(gap).div_ceil(self.step));
        (lower, upper)
    }
}

impl<I> std::iter::FusedIterator for Stride<I> where I: Iterator {}

/// Re-sample a sequence, keeping every `step`-th element.
///
/// # Errors
///
/// Returns [`SeqError::InvalidStep`] when `step` is zero.
///
/// # Examples
///
/// ```
/// use seqtools::striding;
///
/// let kept: Vec<i32> = striding(0..=10, 2)?.collect();
/// assert_eq!(kept, vec![0, 2, 4, 6, 8, 10]);
/// # Ok::<(), seqtools::SeqError>(())
/// ```
#[inline]
pub fn striding<I>(seq: I, step: usize) -> SeqResult<Stride<I::IntoIter>>
where
    I: IntoIterator,
{
    Stride::new(seq.into_iter(), step)
}

// =============================================================================
// Tests
// =============================================================================
