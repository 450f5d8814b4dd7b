//! # Error Types

use std::path::PathBuf;

/// Errors from wordbatch operations.
#[derive(Debug, thiserror::Error)]
pub enum WordbatchError {
    /// A corpus or vocabulary file could not be opened, read, or created.
    #[error("cannot access {path:?}: {source}")]
    FileAccess {
        /// The path which failed.
        path: PathBuf,

        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// The windowing parameters do not fit the sequence.
    #[error(
        "invalid window configuration (data_len={data_len}, batch_size={batch_size}, num_steps={num_steps}): {reason}"
    )]
    InvalidConfiguration {
        /// What was wrong.
        reason: &'static str,

        /// The length of the encoded sequence.
        data_len: usize,

        /// The requested batch size.
        batch_size: usize,

        /// The requested unroll length.
        num_steps: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// Decoding did not consume all tokens.
    #[error("incomplete decode: {remaining} remaining tokens")]
    IncompleteDecode {
        /// The number of remaining tokens.
        remaining: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (integer, line layout, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

impl WordbatchError {
    /// Wrap an io error with the path that produced it.
    pub fn file_access(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Result type for wordbatch operations.
pub type WBResult<T> = core::result::Result<T, WordbatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = WordbatchError::InvalidConfiguration {
            reason: "epoch_size == 0, decrease batch_size or num_steps",
            data_len: 5,
            batch_size: 3,
            num_steps: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("epoch_size == 0"));
        assert!(msg.contains("batch_size=3"));
        assert!(msg.contains("decrease batch_size or num_steps"));
    }

    #[test]
    fn test_file_access_names_path() {
        let err = WordbatchError::file_access(
            "data/lm.train.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("lm.train.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
