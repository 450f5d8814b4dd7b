//! # Frequency-Ranked Vocabulary Building
//!
//! Words are counted, ranked by descending count, and assigned ids `1..=V`
//! in rank order. Ties keep the order in which the words were first seen.
//! Every word in the build text gets an id; id 0 is never assigned.

use std::path::Path;

use crate::{
    errors::WBResult,
    types::TokenType,
    vocab::WordVocab,
    words::{WordCounter, read_words_path, split_words},
};

/// Build a [`WordVocab`] from a finished [`WordCounter`].
pub fn build_vocab_from_counter<T: TokenType>(counter: WordCounter) -> WBResult<WordVocab<T>> {
    let ranked = counter.into_ranked();
    if let Some((word, count)) = ranked.first() {
        log::debug!("most frequent word: {word:?} ({count})");
    }
    WordVocab::from_ranked_words(ranked.into_iter().map(|(w, _)| w))
}

/// Build a [`WordVocab`] from an already-split word stream.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn build_vocab<T, I>(words: I) -> WBResult<WordVocab<T>>
where
    T: TokenType,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counter = WordCounter::default();
    counter.update_from_words(words);
    build_vocab_from_counter(counter)
}

/// Build a [`WordVocab`] from raw text.
///
/// The text is scanned with [`split_words`].
pub fn build_vocab_from_text<T: TokenType>(text: &str) -> WBResult<WordVocab<T>> {
    build_vocab(split_words(text))
}

/// Build a [`WordVocab`] from a text file.
///
/// ## Arguments
/// * `path` - The training text.
///
/// ## Returns
/// The vocabulary, or [`crate::errors::WordbatchError::FileAccess`].
pub fn build_vocab_path<T, P>(path: P) -> WBResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let vocab = build_vocab(read_words_path(path)?)?;
    log::info!(
        "built vocabulary of {} words from {}",
        vocab.len(),
        path.display()
    );
    Ok(vocab)
}
