//! # Word Scanning
//!
//! The single tokenization rule shared by vocabulary building and encoding:
//! every newline is replaced by [`EOS_MARKER`], and the result is split on
//! whitespace.
//!
//! Vocabulary building and encoding must agree on this rule exactly,
//! otherwise ids misalign; both go through [`split_words`].

pub mod word_counter;
pub mod word_reader;

#[doc(inline)]
pub use word_counter::{WordCounter, WordCounterOptions};
#[doc(inline)]
pub use word_reader::{EOS_MARKER, read_words_path, split_words};
