//! # Corpus Loading
//!
//! Orchestrates vocabulary building and encoding over a PTB-style data
//! directory:
//!
//! * `lm.train.txt` - the training split; the vocabulary is built from it.
//! * `lm.valid.txt` - the validation split.
//! * `lm.test.txt` - reserved; only read when [`CorpusOptions::test_file`] is set.
//!
//! ```rust,no_run
//! use wordbatch::{
//!     batching::WindowOptions,
//!     corpus::{RawCorpus, load_raw_corpus},
//! };
//!
//! fn example() -> wordbatch::errors::WBResult<()> {
//!     let corpus: RawCorpus<u32> = load_raw_corpus("data/ptb")?;
//!
//!     let options = WindowOptions::new(20, 35);
//!     for pair in options.windows(&corpus.train)? {
//!         let (x, y) = pair.into_parts();
//!         assert_eq!(x.dim(), (20, 35));
//!         assert_eq!(y.dim(), (20, 35));
//!     }
//!     Ok(())
//! }
//! ```

pub mod corpus_loader;
pub mod corpus_options;
pub mod segments;

#[doc(inline)]
pub use corpus_loader::{RawCorpus, load_raw_corpus};
#[doc(inline)]
pub use corpus_options::{CorpusOptions, TEST_FILE, TRAIN_FILE, VALID_FILE};
#[doc(inline)]
pub use segments::{
    CleanerChain,
    FnCleaner,
    IdentityCleaner,
    SegmentCleaner,
    process_segments,
    process_segments_with,
};
