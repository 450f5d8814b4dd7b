//! # Word ``{ String <-> T }`` Vocabulary

use crate::{
    errors::{WBResult, WordbatchError},
    types::{TokenType, WBHashMap, hash_map_with_capacity},
};

/// The reserved id for words absent from the vocabulary.
pub const UNKNOWN_TOKEN: usize = 0;

/// Dense word vocabulary.
///
/// Words hold ids `1..=len()`; id [`UNKNOWN_TOKEN`] is reserved and never
/// assigned. The vocabulary is immutable once built.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `vocab`.
#[derive(Debug, Clone)]
pub struct WordVocab<T: TokenType> {
    /// Words in id order; `words[i]` has id `i + 1`.
    words: Vec<String>,

    word_ids: WBHashMap<String, T>,
}

impl<T: TokenType> PartialEq for WordVocab<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        // `word_ids` is derived from `words`.
        self.words == other.words
    }
}

impl<T: TokenType> Eq for WordVocab<T> {}

impl<T: TokenType> Default for WordVocab<T> {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            word_ids: hash_map_with_capacity(0),
        }
    }
}

impl<T: TokenType> WordVocab<T> {
    /// Build a vocabulary from distinct words, already in id order.
    ///
    /// The first word gets id 1.
    ///
    /// ## Arguments
    /// * `words` - The ranked, distinct words.
    ///
    /// ## Returns
    /// The vocabulary; or an error if the words repeat,
    /// or if the count does not fit in `T`.
    pub fn from_ranked_words<I>(words: I) -> WBResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if T::from_usize(words.len()).is_none() {
            return Err(WordbatchError::VocabSizeOverflow { size: words.len() });
        }

        let mut word_ids = hash_map_with_capacity(words.len());
        for (idx, word) in words.iter().enumerate() {
            // Checked above: `idx + 1 <= words.len()` fits.
            let token = T::from_usize(idx + 1).ok_or(WordbatchError::TokenOutOfRange)?;
            if word_ids.insert(word.clone(), token).is_some() {
                return Err(WordbatchError::VocabConflict(format!(
                    "duplicate word in vocabulary: {word:?}"
                )));
            }
        }

        Ok(Self { words, word_ids })
    }

    /// Build a vocabulary from explicit ``(word, id)`` entries.
    ///
    /// The ids must be exactly `1..=entries.len()`, in any order.
    pub fn from_entries<I, S>(entries: I) -> WBResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, T)> =
            entries.into_iter().map(|(w, t)| (w.into(), t)).collect();
        entries.sort_by_key(|&(_, t)| t);

        for (idx, (word, token)) in entries.iter().enumerate() {
            if token.to_usize() != Some(idx + 1) {
                return Err(WordbatchError::VocabConflict(format!(
                    "word {word:?} has id {token}; expected ids to be exactly 1..={}",
                    entries.len()
                )));
            }
        }

        Self::from_ranked_words(entries.into_iter().map(|(w, _)| w))
    }

    /// The number of words in the vocabulary, `V`.
    ///
    /// Does not count the reserved unknown id.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the vocabulary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The size of the id space, `V + 1`, counting the unknown id.
    pub fn vocab_size(&self) -> usize {
        self.words.len() + 1
    }

    /// The reserved unknown id.
    pub fn unknown_token(&self) -> T {
        T::zero()
    }

    /// The highest assigned id; `None` for an empty vocabulary.
    pub fn max_token(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            T::from_usize(self.words.len())
        }
    }

    /// Return the id for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_ids.get(word).copied()
    }

    /// Return the id for the word, or the unknown id.
    pub fn token_or_unknown(
        &self,
        word: &str,
    ) -> T {
        self.lookup_token(word).unwrap_or_else(T::zero)
    }

    /// Return the word for the id, if any.
    ///
    /// The unknown id has no word.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        let idx = token.to_usize()?.checked_sub(1)?;
        self.words.get(idx).map(String::as_str)
    }

    /// Iterate ``(word, id)`` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.words
            .iter()
            .map(String::as_str)
            .zip((1..).filter_map(T::from_usize))
    }

    /// The words, in id order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
