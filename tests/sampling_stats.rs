//! Statistical and contract tests for the sampling functions.
//!
//! Uniformity checks run against a seeded generator, so the expected
//! counts are deterministic; the tolerances are still wide enough that
//! any correct uniform sampler would pass with a different seed.

use rand::SeedableRng;
use rand::rngs::StdRng;
use seqtools::{SeqError, SeqTools, random_sample_with, random_stable_sample_with};

// =============================================================================
// Basic Guarantees
// =============================================================================

#[test]
fn test_sample_has_requested_length() {
    let mut rng = StdRng::seed_from_u64(11);
    let sample = random_sample_with(0..100, 8, &mut rng).unwrap();
    assert_eq!(sample.len(), 8);
}

#[test]
fn test_sample_draws_only_source_elements() {
    let mut rng = StdRng::seed_from_u64(12);
    let sample = random_sample_with(0..50, 10, &mut rng).unwrap();
    for value in sample {
        assert!((0..50).contains(&value));
    }
}

#[test]
fn test_sample_never_reuses_a_position() {
    let mut rng = StdRng::seed_from_u64(13);
    // Distinct source values stand in for positions.
    let mut sample = random_sample_with(0..40, 12, &mut rng).unwrap();
    sample.sort_unstable();
    sample.dedup();
    assert_eq!(sample.len(), 12);
}

#[test]
fn test_stable_sample_preserves_source_order() {
    let mut rng = StdRng::seed_from_u64(14);
    let sample = random_stable_sample_with(0..200, 25, &mut rng).unwrap();
    for pair in sample.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_oversized_request_reports_both_lengths() {
    let mut rng = StdRng::seed_from_u64(15);
    let err = random_sample_with(0..3, 10, &mut rng).unwrap_err();
    assert_eq!(err, SeqError::SampleTooLarge { requested: 10, len: 3 });
}

#[test]
fn test_thread_rng_entry_points_uphold_contracts() {
    let sample = (0..30).random_sample(6).unwrap();
    assert_eq!(sample.len(), 6);

    let stable = (0..30).random_stable_sample(6).unwrap();
    assert_eq!(stable.len(), 6);
    for pair in stable.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_sampling_consumes_source_exactly_once() {
    let mut pulls = 0;
    let source = std::iter::from_fn(|| {
        pulls += 1;
        if pulls <= 30 {
            Some(pulls)
        } else {
            None
        }
    });

    let mut rng = StdRng::seed_from_u64(16);
    let sample = random_sample_with(source, 5, &mut rng).unwrap();
    assert_eq!(sample.len(), 5);
    assert_eq!(pulls, 31);
}

// =============================================================================
// Uniformity
// =============================================================================

// 4000 draws of 5-from-20 put each element's expected inclusion count at
// 1000 with a standard deviation near 27; the 850..=1150 window is over
// five sigmas wide on each side.
const TRIALS: usize = 4000;
const SOURCE_LEN: usize = 20;
const SAMPLE_LEN: usize = 5;

#[test]
fn test_randomized_sample_includes_elements_uniformly() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut inclusions = [0_usize; SOURCE_LEN];

    for _ in 0..TRIALS {
        let sample = random_sample_with(0..SOURCE_LEN, SAMPLE_LEN, &mut rng).unwrap();
        for value in sample {
            inclusions[value] += 1;
        }
    }

    for (value, &count) in inclusions.iter().enumerate() {
        assert!(
            (850..=1150).contains(&count),
            "element {value} included {count} times"
        );
    }
}

#[test]
fn test_stable_sample_includes_elements_uniformly() {
    let mut rng = StdRng::seed_from_u64(22);
    let mut inclusions = [0_usize; SOURCE_LEN];

    for _ in 0..TRIALS {
        let sample = random_stable_sample_with(0..SOURCE_LEN, SAMPLE_LEN, &mut rng).unwrap();
        for value in sample {
            inclusions[value] += 1;
        }
    }

    for (value, &count) in inclusions.iter().enumerate() {
        assert!(
            (850..=1150).contains(&count),
            "element {value} included {count} times"
        );
    }
}

// =============================================================================
// Order Randomization and Reproducibility
// =============================================================================

#[test]
fn test_randomized_sample_varies_element_order() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut orderings = Vec::new();

    // Full-length samples always select the whole source, so any
    // variation between trials is purely in ordering.
    for _ in 0..50 {
        let sample = random_sample_with(0..10, 10, &mut rng).unwrap();
        if !orderings.contains(&sample) {
            orderings.push(sample);
        }
    }
    assert!(orderings.len() > 1);
}

#[test]
fn test_same_seed_reproduces_sample() {
    let first = random_sample_with(0..100, 10, &mut StdRng::seed_from_u64(24)).unwrap();
    let second = random_sample_with(0..100, 10, &mut StdRng::seed_from_u64(24)).unwrap();
    assert_eq!(first, second);

    let first = random_stable_sample_with(0..100, 10, &mut StdRng::seed_from_u64(25)).unwrap();
    let second = random_stable_sample_with(0..100, 10, &mut StdRng::seed_from_u64(25)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sampling_composes_with_adapters() {
    let mut rng = StdRng::seed_from_u64(26);
    let sample = (0..1000)
        .striding(7)
        .unwrap()
        .random_stable_sample_with(20, &mut rng)
        .unwrap();

    assert_eq!(sample.len(), 20);
    for pair in sample.windows(2) {
        assert!(pair[0] < pair[1]);
        assert_eq!(pair[0] % 7, 0);
    }
}
