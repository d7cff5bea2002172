//! Two-sequence concatenation.
//!
//! [`Chain`] glues two sources of the same element type into one logical
//! sequence. The second source is not touched until the first runs dry,
//! which keeps the adapter usable when the first source is expensive or
//! unbounded and the consumer stops early.

// =============================================================================
// Chain
// =============================================================================

/// Chains two iterators sequentially, yielding all elements from the first,
/// then all elements from the second.
///
/// Unlike [`Iterator::chain`], this adapter also resolves positional access
/// per side: [`Iterator::nth`] skips inside whichever source holds the
/// target index, so sources with constant-time `nth` keep that efficiency.
///
/// # Performance
///
/// - O(1) per `next()`, delegates to the active source
/// - O(1) space overhead
/// - Exact `size_hint()` when both sources provide one
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<A, B> {
    first: Option<A>,
    second: B,
}

impl<A, B> Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    /// Create a new chain of two iterators.
    #[inline]
    pub fn new(first: A, second: B) -> Self {
        Self {
            first: Some(first),
            second,
        }
    }

    /// Consume the chain, reporting whether `item` occurs in it.
    ///
    /// Scans the first source to exhaustion before the second, stopping at
    /// the first match.
    #[inline]
    #[must_use]
    pub fn contains(mut self, item: &A::Item) -> bool
    where
        A::Item: PartialEq,
    {
        if let Some(mut first) = self.first.take() {
            if first.any(|x| x == *item) {
                return true;
            }
        }
        self.second.any(|x| x == *item)
    }
}

impl<A, B> Iterator for Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        if let Some(ref mut first) = self.first {
            if let Some(val) = first.next() {
                return Some(val);
            }
            self.first = None;
        }
        self.second.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.first.as_ref().map_or((0, Some(0)), |f| f.size_hint());
        let (b_lo, b_hi) = self.second.size_hint();
        let lo = a_lo.saturating_add(b_lo);
        let hi = match (a_hi, b_hi) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (lo, hi)
    }

    fn nth(&mut self, mut n: usize) -> Option<A::Item> {
        if let Some(ref mut first) = self.first {
            let (lo, hi) = first.size_hint();
            if hi == Some(lo) {
                // Exact length known: resolve the index per side.
                if n < lo {
                    return first.nth(n);
                }
                n -= lo;
            } else {
                for val in first.by_ref() {
                    if n == 0 {
                        return Some(val);
                    }
                    n -= 1;
                }
            }
            self.first = None;
        }
        self.second.nth(n)
    }
}

impl<A, B> std::iter::FusedIterator for Chain<A, B>
where
    A: Iterator + std::iter::FusedIterator,
    B: Iterator<Item = A::Item> + std::iter::FusedIterator,
{
}

/// Chain two iterables into one sequence, the first then the second.
///
/// # Examples
///
/// ```
/// use seqtools::chain;
///
/// let joined: Vec<i32> = chain(vec![10, 20, 30], vec![1, 2, 3]).collect();
/// assert_eq!(joined, vec![10, 20, 30, 1, 2, 3]);
/// ```
#[inline]
pub fn chain<A, B>(a: A, b: B) -> Chain<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Chain::new(a.into_iter(), b.into_iter())
}

// =============================================================================
// Tests
// =============================================================================
