//! # Corpus Layout Options

use std::path::{Path, PathBuf};

use crate::{corpus::RawCorpus, errors::WBResult, types::TokenType};

/// The default training file name.
pub const TRAIN_FILE: &str = "lm.train.txt";

/// The default validation file name.
pub const VALID_FILE: &str = "lm.valid.txt";

/// The reserved test file name; only read when configured.
pub const TEST_FILE: &str = "lm.test.txt";

/// Options for loading a [`RawCorpus`] from a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusOptions {
    /// The training file name; the vocabulary is built from this file only.
    pub train_file: String,

    /// The validation file name.
    pub valid_file: String,

    /// The optional test file name.
    pub test_file: Option<String>,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            train_file: TRAIN_FILE.to_string(),
            valid_file: VALID_FILE.to_string(),
            test_file: None,
        }
    }
}

impl CorpusOptions {
    /// Set the training file name.
    pub fn with_train_file(
        self,
        train_file: impl Into<String>,
    ) -> Self {
        Self {
            train_file: train_file.into(),
            ..self
        }
    }

    /// Set the validation file name.
    pub fn with_valid_file(
        self,
        valid_file: impl Into<String>,
    ) -> Self {
        Self {
            valid_file: valid_file.into(),
            ..self
        }
    }

    /// Set the test file name; `None` disables the test split.
    pub fn with_test_file(
        self,
        test_file: Option<impl Into<String>>,
    ) -> Self {
        Self {
            test_file: test_file.map(Into::into),
            ..self
        }
    }

    /// Enable the test split with the reserved [`TEST_FILE`] name.
    pub fn with_default_test_file(self) -> Self {
        self.with_test_file(Some(TEST_FILE))
    }

    /// The training file path under `data_path`.
    pub fn train_path<P: AsRef<Path>>(
        &self,
        data_path: P,
    ) -> PathBuf {
        data_path.as_ref().join(&self.train_file)
    }

    /// The validation file path under `data_path`.
    pub fn valid_path<P: AsRef<Path>>(
        &self,
        data_path: P,
    ) -> PathBuf {
        data_path.as_ref().join(&self.valid_file)
    }

    /// The test file path under `data_path`, if configured.
    pub fn test_path<P: AsRef<Path>>(
        &self,
        data_path: P,
    ) -> Option<PathBuf> {
        self.test_file
            .as_ref()
            .map(|name| data_path.as_ref().join(name))
    }

    /// Load a [`RawCorpus`] from `data_path` with these options.
    ///
    /// See [`crate::corpus::load_raw_corpus`].
    pub fn load<T: TokenType, P: AsRef<Path>>(
        &self,
        data_path: P,
    ) -> WBResult<RawCorpus<T>> {
        RawCorpus::load(self, data_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CorpusOptions::default();
        assert_eq!(options.train_path("data"), Path::new("data/lm.train.txt"));
        assert_eq!(options.valid_path("data"), Path::new("data/lm.valid.txt"));
        assert_eq!(options.test_path("data"), None);
    }

    #[test]
    fn test_builders() {
        let options = CorpusOptions::default()
            .with_train_file("ptb.train.txt")
            .with_valid_file("ptb.valid.txt")
            .with_default_test_file();

        assert_eq!(options.train_path("d"), Path::new("d/ptb.train.txt"));
        assert_eq!(options.valid_path("d"), Path::new("d/ptb.valid.txt"));
        assert_eq!(options.test_path("d"), Some(PathBuf::from("d/lm.test.txt")));

        let options = options.with_test_file(None::<String>);
        assert_eq!(options.test_file, None);
    }
}
