//! # `wordbatch` PTB Corpus Preparation
//!
//! Vocabulary building, word encoding, and minibatch windowing for
//! word-level language model training on PTB-style corpora.
//!
//! See:
//! * [`words`] for the shared newline/whitespace word scanning rule.
//! * [`vocab`] to build, inspect, save, and load a [`vocab::WordVocab`].
//! * [`encoders`] to encode text into ids.
//! * [`decoders`] to decode ids back into words.
//! * [`corpus`] to load and encode a train/valid data directory.
//! * [`batching`] to window an encoded sequence into ``(x, y)`` pairs.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WBHashMap`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! As ``ahash``, but with ``foldhash``. If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``rayon``
//!
//! This enables [`rayon::ParallelRayonEncoder`], a batch-level parallel
//! encoder wrapper.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Loading And Windowing A Corpus
//!
//! ```rust,no_run
//! use wordbatch::{
//!     batching::data_iterator,
//!     corpus::{RawCorpus, load_raw_corpus},
//! };
//!
//! fn example() -> wordbatch::errors::WBResult<()> {
//!     let corpus: RawCorpus<u32> = load_raw_corpus("data/ptb")?;
//!     log::info!("vocab_size: {}", corpus.vocab_size);
//!
//!     for (step, pair) in data_iterator(&corpus.train, 20, 35)?.enumerate() {
//!         // hand `pair.x` / `pair.y` to the training loop.
//!         log::debug!("step {step}: {:?}", pair.x.dim());
//!     }
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod batching;
pub mod corpus;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod types;
pub mod vocab;
pub mod words;

#[doc(inline)]
pub use batching::{WindowOptions, WindowPair, data_iterator};
#[doc(inline)]
pub use corpus::{CorpusOptions, RawCorpus, load_raw_corpus};
#[doc(inline)]
pub use errors::{WBResult, WordbatchError};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::WordVocab;
