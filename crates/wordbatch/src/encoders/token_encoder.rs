//! # Token Encoder Trait

use crate::{types::TokenType, vocab::WordVocab, words::split_words};

/// A trait for word-to-id encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &WordVocab<T>;

    /// Encode an already-split word stream, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `words` - The words to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_words<I>(
        &self,
        words: I,
        tokens: &mut Vec<T>,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let vocab = self.vocab();
        tokens.extend(
            words
                .into_iter()
                .map(|w| vocab.token_or_unknown(w.as_ref())),
        );
    }

    /// Encode an already-split word stream.
    ///
    /// ## Returns
    /// One id per word; `0` for words absent from the vocabulary.
    fn encode_words<I>(
        &self,
        words: I,
    ) -> Vec<T>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tokens = Vec::new();
        self.encode_append_words(words, &mut tokens);
        tokens
    }

    /// Encode raw text into tokens.
    ///
    /// The text is scanned with [`split_words`].
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of tokens.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<T> {
        let words = split_words(text.as_ref());
        let mut tokens = Vec::with_capacity(words.len());
        self.encode_append_words(words, &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of texts to encode.
    ///
    /// ## Returns
    /// One token vector per text, in order.
    fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }
}
