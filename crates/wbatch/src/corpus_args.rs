use std::path::PathBuf;

use wordbatch::{
    CorpusOptions,
    RawCorpus,
    corpus::{TEST_FILE, TRAIN_FILE, VALID_FILE},
};

/// Corpus splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Split {
    /// The training split.
    Train,

    /// The validation split.
    Valid,

    /// The test split.
    Test,
}

/// Data directory arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// The data directory.
    pub data_dir: PathBuf,

    /// Training file name, relative to the data directory.
    #[arg(long, default_value = TRAIN_FILE)]
    pub train_file: String,

    /// Validation file name, relative to the data directory.
    #[arg(long, default_value = VALID_FILE)]
    pub valid_file: String,

    /// Test file name, relative to the data directory.
    #[arg(long, default_value = TEST_FILE)]
    pub test_file: String,
}

impl CorpusArgs {
    /// Build the corpus options; the test file is only read for [`Split::Test`].
    pub fn options(
        &self,
        split: Split,
    ) -> CorpusOptions {
        let options = CorpusOptions::default()
            .with_train_file(self.train_file.clone())
            .with_valid_file(self.valid_file.clone());
        match split {
            Split::Test => options.with_test_file(Some(self.test_file.clone())),
            _ => options,
        }
    }

    /// Load the corpus and select one split.
    pub fn load_split(
        &self,
        split: Split,
    ) -> Result<(RawCorpus<u32>, Vec<u32>), Box<dyn std::error::Error>> {
        let mut corpus: RawCorpus<u32> = self.options(split).load(&self.data_dir)?;
        let ids = match split {
            Split::Train => std::mem::take(&mut corpus.train),
            Split::Valid => std::mem::take(&mut corpus.valid),
            Split::Test => corpus.test.take().ok_or("test split was not loaded")?,
        };
        log::info!("{split:?} split: {} ids", ids.len());
        Ok((corpus, ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dir: &std::path::Path) -> CorpusArgs {
        CorpusArgs {
            data_dir: dir.to_path_buf(),
            train_file: TRAIN_FILE.to_string(),
            valid_file: VALID_FILE.to_string(),
            test_file: TEST_FILE.to_string(),
        }
    }

    #[test]
    fn test_options() {
        let args = args(std::path::Path::new("data"));
        assert_eq!(args.options(Split::Train).test_file, None);
        assert_eq!(
            args.options(Split::Test).test_file,
            Some(TEST_FILE.to_string())
        );
    }

    #[test]
    fn test_load_split() {
        let dir = tempdir::TempDir::new("wbatch_corpus").unwrap();
        std::fs::write(dir.path().join(TRAIN_FILE), " a b a \n").unwrap();
        std::fs::write(dir.path().join(VALID_FILE), " a c \n").unwrap();
        std::fs::write(dir.path().join(TEST_FILE), " b \n").unwrap();

        let args = args(dir.path());
        // a=1, b=2, <eos>=3
        let (corpus, ids) = args.load_split(Split::Valid).unwrap();
        assert_eq!(ids, vec![1, 0, 3]);
        assert!(corpus.valid.is_empty());

        let (_, ids) = args.load_split(Split::Test).unwrap();
        assert_eq!(ids, vec![2, 3]);
    }
}
