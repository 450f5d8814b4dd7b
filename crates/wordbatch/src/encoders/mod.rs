//! # Word Encoders
//!
//! Encoders map text to ids against a fixed [`crate::vocab::WordVocab`].
//! Text is scanned with [`crate::words::split_words`], the same rule used to
//! build the vocabulary; words absent from the vocabulary map to id `0`.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wordbatch::{
//!     encoders::{TokenEncoder, WordEncoder},
//!     vocab::{WordVocab, build_vocab_from_text},
//! };
//!
//! let vocab: Arc<WordVocab<u32>> = Arc::new(build_vocab_from_text(" a b b \n").unwrap());
//! let encoder = WordEncoder::new(vocab);
//!
//! assert_eq!(encoder.encode(" b a z \n"), vec![1, 2, 0, 3]);
//! ```

pub mod token_encoder;
pub mod word_encoder;

#[doc(inline)]
pub use token_encoder::TokenEncoder;
#[doc(inline)]
pub use word_encoder::WordEncoder;
