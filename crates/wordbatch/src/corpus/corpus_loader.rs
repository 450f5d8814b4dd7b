//! # Raw Corpus Loader

use std::{path::Path, sync::Arc};

use crate::{
    corpus::CorpusOptions,
    encoders::{TokenEncoder, WordEncoder},
    errors::WBResult,
    types::TokenType,
    vocab::{WordVocab, build_vocab},
    words::read_words_path,
};

/// Encoded training/validation splits, with the training vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCorpus<T: TokenType> {
    /// The encoded training split.
    pub train: Vec<T>,

    /// The encoded validation split.
    pub valid: Vec<T>,

    /// The encoded test split; only present when configured.
    pub test: Option<Vec<T>>,

    /// The id space size, `V + 1`, counting the unknown id.
    pub vocab_size: usize,

    /// The vocabulary built from the training split.
    pub vocab: Arc<WordVocab<T>>,
}

/// Load the default PTB layout from `data_path`.
///
/// Reads `lm.train.txt` and `lm.valid.txt`; the vocabulary is built from
/// the training file only, and both splits are encoded with it. Validation
/// words unseen in training become the unknown id `0`.
///
/// ## Arguments
/// * `data_path` - The directory holding the corpus files.
///
/// ## Returns
/// The [`RawCorpus`]; or [`crate::errors::WordbatchError::FileAccess`]
/// if a file is missing or unreadable.
pub fn load_raw_corpus<T, P>(data_path: P) -> WBResult<RawCorpus<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    RawCorpus::load(&CorpusOptions::default(), data_path)
}

impl<T: TokenType> RawCorpus<T> {
    /// Load a corpus from `data_path` with the given options.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn load<P: AsRef<Path>>(
        options: &CorpusOptions,
        data_path: P,
    ) -> WBResult<Self> {
        let data_path = data_path.as_ref();

        let train_path = options.train_path(data_path);
        let valid_path = options.valid_path(data_path);

        log::info!("loading corpus from {}", data_path.display());

        // The training text is scanned once, for both counting and encoding.
        let train_words = read_words_path(&train_path)?;
        let vocab: Arc<WordVocab<T>> = Arc::new(build_vocab(&train_words)?);
        log::info!(
            "vocabulary: {} words from {}",
            vocab.len(),
            train_path.display()
        );

        let encoder = WordEncoder::new(vocab.clone());

        let train = encoder.encode_words(&train_words);
        let valid = encoder.encode_words(read_words_path(&valid_path)?);

        let test = match options.test_path(data_path) {
            Some(test_path) => Some(encoder.encode_words(read_words_path(&test_path)?)),
            None => None,
        };

        log::info!(
            "encoded splits: train={} valid={} test={:?}",
            train.len(),
            valid.len(),
            test.as_ref().map(Vec::len)
        );

        Ok(Self {
            train,
            valid,
            test,
            vocab_size: vocab.vocab_size(),
            vocab,
        })
    }

    /// Split into the ``(train, valid, vocab_size, vocab)`` tuple.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, usize, Arc<WordVocab<T>>) {
        (self.train, self.valid, self.vocab_size, self.vocab)
    }

    /// Count the unknown ids in the validation split.
    pub fn valid_unknown_count(&self) -> usize {
        self.valid.iter().filter(|t| t.is_zero()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WordbatchError;

    fn write_corpus(dir: &Path) {
        std::fs::write(dir.join("lm.train.txt"), " the cat sat \n the dog \n").unwrap();
        std::fs::write(dir.join("lm.valid.txt"), " the bird sat \n").unwrap();
    }

    #[test]
    fn test_load_raw_corpus() {
        type T = u32;
        let dir = tempdir::TempDir::new("corpus").unwrap();
        write_corpus(dir.path());

        let corpus: RawCorpus<T> = load_raw_corpus(dir.path()).unwrap();

        // the=1, <eos>=2, cat=3, sat=4, dog=5
        assert_eq!(corpus.train, vec![1, 3, 4, 2, 1, 5, 2]);
        assert_eq!(corpus.valid, vec![1, 0, 4, 2]);
        assert_eq!(corpus.test, None);
        assert_eq!(corpus.vocab_size, 6);
        assert_eq!(corpus.vocab.len(), 5);
        assert_eq!(corpus.valid_unknown_count(), 1);

        let (train, valid, vocab_size, vocab) = corpus.into_parts();
        assert_eq!(train.len(), 7);
        assert_eq!(valid.len(), 4);
        assert_eq!(vocab_size, vocab.len() + 1);
    }

    #[test]
    fn test_vocab_ignores_valid_words() {
        let dir = tempdir::TempDir::new("corpus").unwrap();
        write_corpus(dir.path());

        let corpus: RawCorpus<u16> = load_raw_corpus(dir.path()).unwrap();
        assert_eq!(corpus.vocab.lookup_token("bird"), None);
    }

    #[test]
    fn test_missing_valid_file() {
        let dir = tempdir::TempDir::new("corpus").unwrap();
        std::fs::write(dir.path().join("lm.train.txt"), " a \n").unwrap();

        let res: WBResult<RawCorpus<u32>> = load_raw_corpus(dir.path());
        match res {
            Err(WordbatchError::FileAccess { path, .. }) => {
                assert_eq!(path, dir.path().join("lm.valid.txt"))
            }
            other => panic!("expected FileAccess, got {other:?}"),
        }
    }

    #[test]
    fn test_test_split_only_when_configured() {
        let dir = tempdir::TempDir::new("corpus").unwrap();
        write_corpus(dir.path());

        let options = CorpusOptions::default().with_default_test_file();
        let res: WBResult<RawCorpus<u32>> = options.load(dir.path());
        assert!(matches!(res, Err(WordbatchError::FileAccess { .. })));

        std::fs::write(dir.path().join("lm.test.txt"), " the cat \n").unwrap();
        let corpus: RawCorpus<u32> = options.load(dir.path()).unwrap();
        assert_eq!(corpus.test, Some(vec![1, 3, 2]));
    }
}
