//! # Seqtools
//!
//! Lazy sequence adapters and sampling algorithms for iterators.
//!
//! This crate provides composable building blocks for sequence pipelines:
//!
//! - **Concatenation**: [`Chain`] with per-side positional access
//! - **Selection**: [`Stride`], [`Uniqued`], [`UniquedOn`], [`Compacted`]
//! - **Grouping**: [`Chunks`], [`ChunkedOn`], [`ChunkedBy`]
//! - **Overlap**: [`AdjacentPairs`], [`Windows`]
//! - **Combination**: [`Product`] of two sequences in row-major order
//! - **Sampling**: single-pass reservoir selection, with or without
//!   source-order stability
//!
//! Every adapter is lazy and pulls from its source only on demand.
//! Argument validation happens eagerly at construction, returning
//! [`SeqError`] instead of panicking, so `.striding(0)` is an error value
//! rather than a runtime fault deep inside a pipeline.
//!
//! The [`SeqTools`] extension trait is blanket-implemented for every sized
//! iterator and is the intended entry point; the adapter types themselves
//! are exposed so pipelines can be named in struct fields and signatures.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chain;
pub mod chunks;
pub mod compact;
pub mod error;
pub mod ext;
pub mod product;
pub mod sample;
pub mod stride;
pub mod unique;
pub mod windows;

pub use chain::{Chain, chain};
pub use chunks::{ChunkedBy, ChunkedOn, Chunks};
pub use compact::Compacted;
pub use error::{SeqError, SeqResult};
pub use ext::SeqTools;
pub use product::{Product, product};
pub use sample::{
    random_sample, random_sample_with, random_stable_sample, random_stable_sample_with,
};
pub use stride::{Stride, striding};
pub use unique::{Uniqued, UniquedOn};
pub use windows::{AdjacentPairs, Windows};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
