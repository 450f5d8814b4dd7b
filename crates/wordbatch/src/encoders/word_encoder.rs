//! # Vocabulary Lookup Encoder

use std::sync::Arc;

use crate::{encoders::TokenEncoder, types::TokenType, vocab::WordVocab};

/// A [`TokenEncoder<T>`] over a shared [`WordVocab<T>`].
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `encoder`.
#[derive(Debug, Clone)]
pub struct WordEncoder<T: TokenType> {
    vocab: Arc<WordVocab<T>>,
}

impl<T: TokenType> WordEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to look words up in.
    pub fn new(vocab: Arc<WordVocab<T>>) -> Self {
        Self { vocab }
    }

    /// Get the shared vocabulary handle.
    pub fn shared_vocab(&self) -> &Arc<WordVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenEncoder<T> for WordEncoder<T> {
    fn vocab(&self) -> &WordVocab<T> {
        &self.vocab
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        types::{check_is_send, check_is_sync},
        vocab::build_vocab_from_text,
    };

    fn test_encoder() -> WordEncoder<u32> {
        let vocab = build_vocab_from_text(" the cat sat \n the dog \n").unwrap();
        WordEncoder::new(Arc::new(vocab))
    }

    #[test]
    fn test_encode_text() {
        let encoder = test_encoder();
        check_is_send(&encoder);
        check_is_sync(&encoder);

        // the=1, <eos>=2, cat=3, sat=4, dog=5
        assert_eq!(encoder.encode(" the dog sat \n"), vec![1, 5, 4, 2]);
        assert_eq!(encoder.encode(" a cow \n"), vec![0, 0, 2]);
        assert!(encoder.encode("").is_empty());
    }

    #[test]
    fn test_encode_words() {
        let encoder = test_encoder();
        assert_eq!(encoder.encode_words(["cat", "<eos>", "zebra"]), vec![3, 2, 0]);

        let mut tokens = vec![9];
        encoder.encode_append_words(vec!["the".to_string()], &mut tokens);
        assert_eq!(tokens, vec![9, 1]);
    }

    #[test]
    fn test_empty_vocab_maps_everything_unknown() {
        let encoder: WordEncoder<u16> = WordEncoder::new(Arc::new(WordVocab::default()));
        assert_eq!(encoder.encode(" any words \n here"), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_batch() {
        let encoder = test_encoder();
        let batch = vec!["the cat", "dog \n", "unknown"];
        assert_eq!(
            encoder.encode_batch(&batch),
            vec![vec![1, 3], vec![5, 2], vec![0]]
        );
    }
}
