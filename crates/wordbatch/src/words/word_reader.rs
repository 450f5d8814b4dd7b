//! # Word Reader

use std::path::Path;

use crate::errors::{WBResult, WordbatchError};

/// The end-of-sequence marker substituted for every newline.
///
/// The marker is counted and assigned an id like any other word.
pub const EOS_MARKER: &str = "<eos>";

/// Apply the newline substitution and split text into words.
///
/// The substitution happens *before* the split, so a newline with no
/// surrounding whitespace fuses its neighbors into one word:
/// `"a\nb"` scans as `["a<eos>b"]`. PTB-style corpora pad every line
/// with spaces, so in practice `<eos>` stands alone.
///
/// ## Arguments
/// * `text` - The raw text.
///
/// ## Returns
/// The ordered word list.
pub fn split_words(text: &str) -> Vec<String> {
    text.replace('\n', EOS_MARKER)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Read a file and split it into words.
///
/// ## Arguments
/// * `path` - The file to read.
///
/// ## Returns
/// The ordered word list, or [`WordbatchError::FileAccess`] naming the path.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn read_words_path<P: AsRef<Path>>(path: P) -> WBResult<Vec<String>> {
    let path = path.as_ref();
    let text =
        std::fs::read_to_string(path).map_err(|e| WordbatchError::file_access(path, e))?;
    let words = split_words(&text);
    log::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}
