//! # Vocabulary IO
//!
//! ## Saving And Loading A Vocab
//!
//! ```rust,no_run
//! use wordbatch::vocab::{
//!     WordVocab,
//!     build_vocab_path,
//!     io::{load_text_vocab_path, save_text_vocab_path},
//! };
//!
//! fn example() -> wordbatch::errors::WBResult<WordVocab<u32>> {
//!     let vocab: WordVocab<u32> = build_vocab_path("data/lm.train.txt")?;
//!     save_text_vocab_path(&vocab, "vocab.txt")?;
//!
//!     load_text_vocab_path("vocab.txt")
//! }
//! ```

mod text_vocab;

#[doc(inline)]
pub use text_vocab::*;
