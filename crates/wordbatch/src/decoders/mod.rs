//! # Word Decoders
//!
//! Decoders invert a [`crate::vocab::WordVocab`], mapping ids back to words.
//! The unknown id `0` has no word; decoding is lossy for words which were
//! encoded as unknown.

pub mod decode_results;
pub mod word_decoder;

#[doc(inline)]
pub use decode_results::DecodeResult;
#[doc(inline)]
pub use word_decoder::{UNKNOWN_WORD, WordDecoder};
