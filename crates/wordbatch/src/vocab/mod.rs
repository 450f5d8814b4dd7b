//! # Vocabulary
//!
//! This module provides the word vocabulary, its frequency-ranked builder,
//! and io mechanisms.
//!
//! * [`WordVocab`] - a dense ``{ String <-> T }`` vocabulary over ids `1..=V`;
//!   id `0` is reserved for unknown words.
//! * [`build_vocab_path`] - count a training text and rank its words.
//! * [`io`] - a plain ``{WORD}\t{ID}`` text format.

pub mod io;
pub mod vocab_builder;
pub mod word_vocab;

#[doc(inline)]
pub use vocab_builder::{
    build_vocab,
    build_vocab_from_counter,
    build_vocab_from_text,
    build_vocab_path,
};
#[doc(inline)]
pub use word_vocab::{UNKNOWN_TOKEN, WordVocab};
