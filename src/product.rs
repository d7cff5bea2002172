//! Cartesian pairing of two sequences.

// =============================================================================
// Product
// =============================================================================

/// Enumerates all pairs of two sequences in row-major order.
///
/// Each element of the outer sequence, in order, is paired with every
/// element of the inner sequence, in order. The inner sequence is restored
/// from a pristine clone each time the outer sequence advances, so it must
/// be finite and cheaply cloneable (slice and range iterators are).
///
/// # Performance
///
/// - O(1) per `next()`, plus one inner clone per outer element
/// - O(1) space beyond the held outer element
/// - Exact `size_hint()` when both sources provide one
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Product<A: Iterator, B> {
    outer: A,
    /// Outer element currently being paired. `None` once the outer
    /// sequence is exhausted.
    cur: Option<A::Item>,
    inner: B,
    inner_src: B,
}

impl<A, B> Product<A, B>
where
    A: Iterator,
    B: Iterator + Clone,
{
    /// Create the row-major product of two iterators.
    #[inline]
    pub fn new(mut outer: A, inner: B) -> Self {
        Self {
            cur: outer.next(),
            outer,
            inner: inner.clone(),
            inner_src: inner,
        }
    }
}

impl<A, B> Iterator for Product<A, B>
where
    A: Iterator,
    A::Item: Clone,
    B: Iterator + Clone,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<(A::Item, B::Item)> {
        if self.cur.is_none() {
            return None;
        }

        let inner_item = match self.inner.next() {
            Some(item) => item,
            None => {
                // Current row done: advance the outer, rewind the inner
                self.cur = self.outer.next();
                if self.cur.is_none() {
                    return None;
                }
                self.inner = self.inner_src.clone();
                self.inner.next()?
            }
        };

        let outer_item = self.cur.as_ref()?;
        Some((outer_item.clone(), inner_item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Remaining pairs of the current row, then full rows for every
        // remaining outer element.
        let (row_lo, row_hi) = if self.cur.is_some() {
            self.inner.size_hint()
        } else {
            (0, Some(0))
        };
        let (outer_lo, outer_hi) = self.outer.size_hint();
        let (src_lo, src_hi) = self.inner_src.size_hint();

        let lo = row_lo.saturating_add(outer_lo.saturating_mul(src_lo));
        let hi = match (row_hi, outer_hi, src_hi) {
            (Some(row), Some(outer), Some(src)) => {
                outer.checked_mul(src).and_then(|rows| rows.checked_add(row))
            }
            _ => None,
        };
        (lo, hi)
    }
}

impl<A, B> std::iter::FusedIterator for Product<A, B>
where
    A: Iterator,
    A::Item: Clone,
    B: Iterator + Clone,
{
}

/// Pair every element of `a` with every element of `b`, row-major.
///
/// # Examples
///
/// ```
/// use seqtools::product;
///
/// let pairs: Vec<(i32, char)> = product(vec![1, 2], vec!['a', 'b']).collect();
/// assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
/// ```
#[inline]
pub fn product<A, B>(a: A, b: B) -> Product<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    B::IntoIter: Clone,
{
    Product::new(a.into_iter(), b.into_iter())
}

// =============================================================================
// Tests
// =============================================================================
