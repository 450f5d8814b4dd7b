//! # Rayon Parallelism
//!
//! Batch-level parallel wrappers; enabled by the ``rayon`` feature.

pub mod rayon_encoder;

#[doc(inline)]
pub use rayon_encoder::ParallelRayonEncoder;
