//! # Word Counter

use crate::{
    types::{WBHashMap, hash_map_with_capacity},
    words::split_words,
};

/// Expected number of distinct words; PTB has 10k.
pub const EXPECTED_DISTINCT_WORDS: usize = 10_000;

/// Options for [`WordCounter`].
#[derive(Debug, Clone)]
pub struct WordCounterOptions {
    /// Expected number of distinct words.
    /// Used when pre-allocating buffers.
    pub expected_words: usize,
}

impl Default for WordCounterOptions {
    fn default() -> Self {
        Self {
            expected_words: EXPECTED_DISTINCT_WORDS,
        }
    }
}

impl WordCounterOptions {
    /// Set the expected number of distinct words.
    /// Used when pre-allocating buffers.
    pub fn with_expected_words(
        self,
        expected_words: usize,
    ) -> Self {
        Self { expected_words }
    }

    /// Build a [`WordCounter`] with these options.
    pub fn init(self) -> WordCounter {
        WordCounter::new(self)
    }
}

/// Word counter which remembers the order words were first seen.
///
/// First-seen order is the tie-break for vocabulary ranking;
/// so counts are kept in an insertion-ordered table, with a hash index.
#[derive(Debug, Clone)]
pub struct WordCounter {
    /// The config options.
    pub options: WordCounterOptions,

    index: WBHashMap<String, usize>,

    counts: Vec<(String, usize)>,
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new(WordCounterOptions::default())
    }
}

impl WordCounter {
    /// Create a new word counter.
    pub fn new(options: WordCounterOptions) -> Self {
        let capacity = options.expected_words;
        Self {
            options,
            index: hash_map_with_capacity(capacity),
            counts: Vec::with_capacity(capacity),
        }
    }

    /// The number of distinct words seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no words have been seen.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The total number of words seen.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// The count for a word; 0 if never seen.
    pub fn count(
        &self,
        word: &str,
    ) -> usize {
        self.index.get(word).map_or(0, |&idx| self.counts[idx].1)
    }

    /// Count one word.
    pub fn add_word(
        &mut self,
        word: &str,
    ) {
        match self.index.get(word) {
            Some(&idx) => self.counts[idx].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.counts.len());
                self.counts.push((word.to_string(), 1));
            }
        }
    }

    /// Update word counts inplace from an already-split word stream.
    pub fn update_from_words<I>(
        &mut self,
        words: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// Update word counts inplace from raw text.
    ///
    /// The text is scanned with [`split_words`].
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.update_from_words(split_words(text.as_ref()));
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Iterate ``(word, count)`` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Release the counts, ranked by descending count.
    ///
    /// Ties keep their first-seen order.
    pub fn into_ranked(self) -> Vec<(String, usize)> {
        let mut counts = self.counts;
        // `sort_by` is stable.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter() {
        let mut wc = WordCounterOptions::default().with_expected_words(8).init();

        let samples = vec!["Hello world", "Foo world bar world"];
        wc.update_from_samples(samples.iter());

        assert_eq!(wc.len(), 4);
        assert_eq!(wc.total(), 6);
        assert_eq!(wc.count("world"), 3);
        assert_eq!(wc.count("Hello"), 1);
        assert_eq!(wc.count("missing"), 0);

        assert_eq!(
            wc.iter().collect::<Vec<_>>(),
            vec![("Hello", 1), ("world", 3), ("Foo", 1), ("bar", 1)]
        );
    }

    #[test]
    fn test_ranked_ties_keep_first_seen_order() {
        let mut wc = WordCounter::default();
        wc.update_from_words(["c", "b", "a", "b", "z", "a"]);

        assert_eq!(
            wc.into_ranked(),
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1),
                ("z".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_counts_eos_marker() {
        let mut wc = WordCounter::default();
        wc.update_from_text(" a \n a \n");

        assert_eq!(wc.count("<eos>"), 2);
        assert_eq!(wc.count("a"), 2);
    }

    #[test]
    fn test_empty() {
        let wc = WordCounter::default();
        assert!(wc.is_empty());
        assert_eq!(wc.total(), 0);
        assert!(wc.into_ranked().is_empty());
    }
}
