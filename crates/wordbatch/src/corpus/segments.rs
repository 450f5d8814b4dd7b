//! # Segment Processing
//!
//! Encodes pre-segmented text (sentences, reviews, ...) against an existing
//! vocabulary. Segments pass through a [`SegmentCleaner`] first; the
//! cleaners themselves (punctuation normalization, numeric-symbol
//! substitution) live outside this crate, behind the trait.

use std::sync::Arc;

use crate::{
    encoders::{TokenEncoder, WordEncoder},
    errors::{WBResult, WordbatchError},
    types::TokenType,
    vocab::WordVocab,
};

/// A text cleaning stage applied to a whole segment list.
///
/// Implementations must return exactly one cleaned segment per input
/// segment, in the same order.
pub trait SegmentCleaner {
    /// Clean the segments.
    fn clean_segments<S: AsRef<str>>(
        &self,
        segments: &[S],
    ) -> Vec<String>;
}

/// A [`SegmentCleaner`] which passes segments through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCleaner;

impl SegmentCleaner for IdentityCleaner {
    fn clean_segments<S: AsRef<str>>(
        &self,
        segments: &[S],
    ) -> Vec<String> {
        segments.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

/// A [`SegmentCleaner`] applying a per-segment function.
#[derive(Debug, Clone, Copy)]
pub struct FnCleaner<F>(pub F);

impl<F> SegmentCleaner for FnCleaner<F>
where
    F: Fn(&str) -> String,
{
    fn clean_segments<S: AsRef<str>>(
        &self,
        segments: &[S],
    ) -> Vec<String> {
        segments.iter().map(|s| (self.0)(s.as_ref())).collect()
    }
}

/// Two cleaning stages run in order: `first`, then `second`.
///
/// The usual pipeline is punctuation normalization followed by
/// numeric-symbol substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanerChain<A, B> {
    /// The first stage.
    pub first: A,

    /// The second stage; sees the output of `first`.
    pub second: B,
}

impl<A, B> CleanerChain<A, B> {
    /// Chain two stages.
    pub fn new(
        first: A,
        second: B,
    ) -> Self {
        Self { first, second }
    }
}

impl<A, B> SegmentCleaner for CleanerChain<A, B>
where
    A: SegmentCleaner,
    B: SegmentCleaner,
{
    fn clean_segments<S: AsRef<str>>(
        &self,
        segments: &[S],
    ) -> Vec<String> {
        self.second
            .clean_segments(&self.first.clean_segments(segments))
    }
}

/// Clean and encode segments against an existing vocabulary.
///
/// Each cleaned segment is scanned with [`crate::words::split_words`];
/// words absent from the vocabulary map to `0`.
///
/// ## Arguments
/// * `segments` - The raw segments.
/// * `vocab` - A previously built vocabulary.
/// * `cleaner` - The cleaning stage(s).
///
/// ## Returns
/// One encoded sequence per input segment, in order.
pub fn process_segments<T, S, C>(
    segments: &[S],
    vocab: Arc<WordVocab<T>>,
    cleaner: &C,
) -> WBResult<Vec<Vec<T>>>
where
    T: TokenType,
    S: AsRef<str>,
    C: SegmentCleaner,
{
    process_segments_with(segments, &WordEncoder::new(vocab), cleaner)
}

/// Clean and encode segments with a given encoder.
///
/// See [`process_segments`]; batch encoding goes through
/// [`TokenEncoder::encode_batch`], so parallel encoders apply.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn process_segments_with<T, S, E, C>(
    segments: &[S],
    encoder: &E,
    cleaner: &C,
) -> WBResult<Vec<Vec<T>>>
where
    T: TokenType,
    S: AsRef<str>,
    E: TokenEncoder<T>,
    C: SegmentCleaner,
{
    let cleaned = cleaner.clean_segments(segments);
    if cleaned.len() != segments.len() {
        return Err(WordbatchError::External(format!(
            "segment cleaner returned {} segments for {} inputs",
            cleaned.len(),
            segments.len()
        )));
    }
    log::debug!("encoding {} segments", cleaned.len());
    Ok(encoder.encode_batch(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::build_vocab_from_text;

    fn vocab() -> Arc<WordVocab<u32>> {
        // the=1, <eos>=2, cat=3, N=4, sat=5
        Arc::new(build_vocab_from_text(" the cat N \n the sat \n").unwrap())
    }

    struct DropAll;

    impl SegmentCleaner for DropAll {
        fn clean_segments<S: AsRef<str>>(
            &self,
            _segments: &[S],
        ) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_identity() {
        let segments = vec!["the cat\nsat", "dog"];
        let out = process_segments(&segments, vocab(), &IdentityCleaner).unwrap();
        // "cat\nsat" fuses into one unknown word.
        assert_eq!(out, vec![vec![1, 0], vec![0]]);
    }

    #[test]
    fn test_chain_runs_in_order() {
        let punct = FnCleaner(|s: &str| s.replace(['.', ','], " "));
        let digits = FnCleaner(|s: &str| {
            s.split_whitespace()
                .map(|w| {
                    if w.chars().all(|c| c.is_ascii_digit()) {
                        "N"
                    } else {
                        w
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        });
        let cleaner = CleanerChain::new(punct, digits);

        let segments = vec!["the cat, 42.".to_string(), "sat 7 \n".to_string()];
        let out = process_segments(&segments, vocab(), &cleaner).unwrap();
        // The digit stage re-joins on spaces, so the newline is gone.
        assert_eq!(out, vec![vec![1, 3, 4], vec![5, 4]]);
    }

    #[test]
    fn test_newline_becomes_eos() {
        let segments = vec![" the cat \n the \n"];
        let out = process_segments(&segments, vocab(), &IdentityCleaner).unwrap();
        assert_eq!(out, vec![vec![1, 3, 2, 1, 2]]);
    }

    #[test]
    fn test_empty_vocab() {
        let segments = vec!["a b", "c"];
        let out = process_segments(&segments, Arc::new(WordVocab::<u16>::default()), &IdentityCleaner)
            .unwrap();
        assert_eq!(out, vec![vec![0, 0], vec![0]]);
    }

    #[test]
    fn test_length_mismatch() {
        let segments = vec!["a"];
        let res = process_segments(&segments, vocab(), &DropAll);
        assert!(matches!(res, Err(WordbatchError::External(_))));
    }
}
