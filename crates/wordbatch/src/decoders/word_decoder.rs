//! # Vocabulary Inverse Decoder

use std::sync::Arc;

use crate::{
    decoders::DecodeResult,
    types::TokenType,
    vocab::WordVocab,
    words::EOS_MARKER,
};

/// The placeholder word for ids with no vocabulary entry.
pub const UNKNOWN_WORD: &str = "<unk>";

/// Decodes ids back into words through a shared [`WordVocab<T>`].
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `decoder`.
#[derive(Debug, Clone)]
pub struct WordDecoder<T: TokenType> {
    vocab: Arc<WordVocab<T>>,
}

impl<T: TokenType> WordDecoder<T> {
    /// Create a new decoder.
    pub fn new(vocab: Arc<WordVocab<T>>) -> Self {
        Self { vocab }
    }

    /// Get the attached vocabulary.
    pub fn vocab(&self) -> &WordVocab<T> {
        &self.vocab
    }

    /// Decode tokens into words, stopping at the first id with no word.
    ///
    /// ## Returns
    /// The decoded prefix; [`DecodeResult::remaining`] counts the tokens
    /// not decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn try_decode_words(
        &self,
        tokens: &[T],
    ) -> DecodeResult<Vec<String>> {
        let mut value = Vec::with_capacity(tokens.len());
        for &t in tokens {
            match self.vocab.lookup_word(t) {
                Some(w) => value.push(w.to_string()),
                None => break,
            }
        }
        let remaining = tokens.len() - value.len();
        DecodeResult::new(value, Some(remaining))
    }

    /// Decode tokens into words, substituting [`UNKNOWN_WORD`] for ids with no word.
    pub fn decode_words_lossy(
        &self,
        tokens: &[T],
    ) -> Vec<String> {
        tokens
            .iter()
            .map(|&t| self.vocab.lookup_word(t).unwrap_or(UNKNOWN_WORD).to_string())
            .collect()
    }

    /// Decode tokens into PTB-style text.
    ///
    /// Words are joined by single spaces; [`EOS_MARKER`] becomes a newline.
    /// Scanning the result with [`crate::words::split_words`] reproduces the
    /// lossy word list.
    pub fn decode_to_text_lossy(
        &self,
        tokens: &[T],
    ) -> String {
        let mut text = String::new();
        for word in self.decode_words_lossy(tokens) {
            if word == EOS_MARKER {
                text.push_str(" \n");
            } else {
                text.push(' ');
                text.push_str(&word);
            }
        }
        text
    }
}
