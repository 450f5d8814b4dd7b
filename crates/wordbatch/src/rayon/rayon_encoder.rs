//! # Parallel Encoder

use crate::{encoders::TokenEncoder, types::TokenType, vocab::WordVocab};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Encodes each text of a batch on the ``rayon`` pool; output order
/// matches input order.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType, D: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: D,

    _marker: std::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, D> TokenEncoder<T> for ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: TokenEncoder<T>,
{
    fn vocab(&self) -> &WordVocab<T> {
        self.inner.vocab()
    }

    fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.inner.encode(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        encoders::WordEncoder,
        types::{check_is_send, check_is_sync},
        vocab::build_vocab_from_text,
    };

    #[test]
    fn test_parallel_matches_sequential() {
        type T = u16;

        let vocab: Arc<WordVocab<T>> =
            Arc::new(build_vocab_from_text(" a b c \n b c \n c \n").unwrap());

        let samples: Vec<String> = (0..64)
            .map(|i| match i % 3 {
                0 => " a b \n".to_string(),
                1 => format!(" c x{i} \n"),
                _ => "b b b".to_string(),
            })
            .collect();

        let encoder = WordEncoder::new(vocab);
        let expected = encoder.encode_batch(&samples);

        let encoder = ParallelRayonEncoder::new(encoder);
        check_is_send(&encoder);
        check_is_sync(&encoder);

        assert_eq!(encoder.encode_batch(&samples), expected);
        assert_eq!(encoder.encode(" a \n"), vec![4, 2]);
    }
}
