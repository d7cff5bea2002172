//! Uniform random sampling without replacement.
//!
//! Both sampling operations run over the source exactly once, reservoir
//! style: the first `count` elements fill a buffer, and the element at
//! 0-based position `i >= count` then replaces a uniformly random buffer
//! slot with probability `count / (i + 1)`. Every length-`count` subset of
//! the source is equally likely.
//!
//! The generator is an explicit parameter on the `_with` forms so tests
//! can seed it; the plain forms draw from [`rand::thread_rng`].

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{SeqError, SeqResult};

// =============================================================================
// Randomized-order sampling
// =============================================================================

/// Select `count` elements uniformly at random, in randomized order.
///
/// # Errors
///
/// Returns [`SeqError::SampleTooLarge`] when the source produces fewer
/// than `count` elements.
pub fn random_sample<I>(seq: I, count: usize) -> SeqResult<Vec<I::Item>>
where
    I: IntoIterator,
{
    random_sample_with(seq, count, &mut rand::thread_rng())
}

/// Select `count` elements uniformly at random using `rng`, in randomized
/// order.
///
/// # Errors
///
/// Returns [`SeqError::SampleTooLarge`] when the source produces fewer
/// than `count` elements.
pub fn random_sample_with<I, R>(seq: I, count: usize, rng: &mut R) -> SeqResult<Vec<I::Item>>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut sample: Vec<I::Item> = reservoir(seq, count, rng)?
        .into_iter()
        .map(|(_, item)| item)
        .collect();
    // The reservoir is a uniform subset but its slot order is biased, so
    // randomize it before returning.
    sample.shuffle(rng);
    Ok(sample)
}

// =============================================================================
// Order-preserving sampling
// =============================================================================

/// Select `count` elements uniformly at random, preserving their original
/// relative order.
///
/// # Errors
///
/// Returns [`SeqError::SampleTooLarge`] when the source produces fewer
/// than `count` elements.
pub fn random_stable_sample<I>(seq: I, count: usize) -> SeqResult<Vec<I::Item>>
where
    I: IntoIterator,
{
    random_stable_sample_with(seq, count, &mut rand::thread_rng())
}

/// Select `count` elements uniformly at random using `rng`, preserving
/// their original relative order.
///
/// # Errors
///
/// Returns [`SeqError::SampleTooLarge`] when the source produces fewer
/// than `count` elements.
pub fn random_stable_sample_with<I, R>(
    seq: I,
    count: usize,
    rng: &mut R,
) -> SeqResult<Vec<I::Item>>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut sample = reservoir(seq, count, rng)?;
    // Selection indices restore the original relative order.
    sample.sort_unstable_by_key(|&(index, _)| index);
    Ok(sample.into_iter().map(|(_, item)| item).collect())
}

// =============================================================================
// Reservoir core
// =============================================================================

/// Single-pass reservoir selection of `count` elements, tagged with their
/// original source positions. Slot order is arbitrary.
fn reservoir<I, R>(seq: I, count: usize, rng: &mut R) -> SeqResult<Vec<(usize, I::Item)>>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut iter = seq.into_iter();
    let mut buf: Vec<(usize, I::Item)> = Vec::with_capacity(count);
    while buf.len() < count {
        match iter.next() {
            Some(item) => buf.push((buf.len(), item)),
            None => return Err(SeqError::sample_too_large(count, buf.len())),
        }
    }

    for (offset, item) in iter.enumerate() {
        let index = count + offset;
        // Keep the incoming element with probability count / (index + 1).
        let slot = rng.gen_range(0..=index);
        if slot < count {
            buf[slot] = (index, item);
        }
    }

    Ok(buf)
}

// =============================================================================
// Tests
// =============================================================================
