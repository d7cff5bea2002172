//! Flattening away missing values.

// =============================================================================
// Compacted
// =============================================================================

/// Filters a sequence of optionals down to its present values.
///
/// Order and multiplicity of the present values are preserved.
///
/// # Performance
///
/// - O(1) per source element
/// - O(1) space overhead
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Compacted<I> {
    iter: I,
}

impl<I, T> Compacted<I>
where
    I: Iterator<Item = Option<T>>,
{
    /// Create a new compacting iterator.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I, T> Iterator for Compacted<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(val) = self.iter.next()? {
                return Some(val);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Can't know how many values are present
        (0, self.iter.size_hint().1)
    }
}

impl<I, T> std::iter::FusedIterator for Compacted<I> where
    I: Iterator<Item = Option<T>> + std::iter::FusedIterator
{
}

// =============================================================================
// Tests
// =============================================================================
