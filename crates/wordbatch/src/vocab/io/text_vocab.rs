//! # Text Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WBResult, WordbatchError},
    types::TokenType,
    vocab::WordVocab,
};

/// Load a [`WordVocab`] from a text vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {WORD}\t{ID}
/// ```
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_text_vocab_path<T, P>(path: P) -> WBResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| WordbatchError::file_access(path, e))?;
    read_text_vocab(BufReader::new(file))
}

/// Read a [`WordVocab`] from a text vocab line reader.
///
/// Lines are:
/// ```terminaloutput
/// {WORD}\t{ID}
/// ```
///
/// Blank lines are skipped. The ids must be exactly `1..=V`.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_text_vocab<T, R>(reader: R) -> WBResult<WordVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut entries: Vec<(String, T)> = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (word, id) = line.split_once('\t').ok_or_else(|| {
            WordbatchError::Parse(format!("line {}: expected WORD<TAB>ID", lineno + 1))
        })?;

        if word.is_empty() || word.chars().any(char::is_whitespace) {
            return Err(WordbatchError::Parse(format!(
                "line {}: invalid word {word:?}",
                lineno + 1
            )));
        }

        let id: u64 = id
            .trim()
            .parse()
            .map_err(|e: core::num::ParseIntError| {
                WordbatchError::Parse(format!("line {}: {e}", lineno + 1))
            })?;
        let token = T::from_u64(id).ok_or(WordbatchError::TokenOutOfRange)?;

        entries.push((word.to_string(), token));
    }

    WordVocab::from_entries(entries)
}

/// Save a [`WordVocab`] to a text vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {WORD}\t{ID}
/// ```
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_text_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &WordVocab<T>,
    path: P,
) -> WBResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| WordbatchError::file_access(path, e))?;
    let mut writer = BufWriter::new(file);
    write_text_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordVocab`] to a [`Write`] writer, in id order.
///
/// Lines are:
/// ```terminaloutput
/// {WORD}\t{ID}
/// ```
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_text_vocab<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> WBResult<()>
where
    T: TokenType,
    W: Write,
{
    for (word, token) in vocab.iter() {
        writeln!(writer, "{word}\t{token}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::build_vocab_from_text;

    #[test]
    fn test_save_load_text_vocab() {
        type T = u32;

        let vocab: WordVocab<T> =
            build_vocab_from_text(" the cat \n the dog \n the end \n").unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");

                save_text_vocab_path(&vocab, &path).expect("Failed to save vocab");

                let loaded: WordVocab<T> =
                    load_text_vocab_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_write_layout() {
        let vocab: WordVocab<u16> = WordVocab::from_ranked_words(["<eos>", "a"]).unwrap();
        let mut buf: Vec<u8> = Vec::new();
        write_text_vocab(&vocab, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "<eos>\t1\na\t2\n");
    }

    #[test]
    fn test_read_errors() {
        type T = u8;

        let res: WBResult<WordVocab<T>> = read_text_vocab("a 1\n".as_bytes());
        assert!(matches!(res, Err(WordbatchError::Parse(_))));

        let res: WBResult<WordVocab<T>> = read_text_vocab("a\tx\n".as_bytes());
        assert!(matches!(res, Err(WordbatchError::Parse(_))));

        let res: WBResult<WordVocab<T>> = read_text_vocab("a\t300\n".as_bytes());
        assert!(matches!(res, Err(WordbatchError::TokenOutOfRange)));

        let res: WBResult<WordVocab<T>> = read_text_vocab("a\t1\nb\t1\n".as_bytes());
        assert!(matches!(res, Err(WordbatchError::VocabConflict(_))));

        let res: WBResult<WordVocab<T>> = read_text_vocab("a\t2\n".as_bytes());
        assert!(matches!(res, Err(WordbatchError::VocabConflict(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let res: WBResult<WordVocab<u32>> = load_text_vocab_path("/nonexistent/vocab.txt");
        assert!(matches!(res, Err(WordbatchError::FileAccess { .. })));
    }
}
