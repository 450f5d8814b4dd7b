//! # Batch Matrix

use ndarray::{Array2, ArrayView2};

use crate::types::TokenType;

/// A flat sequence reshaped into `batch_size` parallel streams.
///
/// Row `i` is the contiguous run `sequence[i * batch_len..(i + 1) * batch_len]`,
/// where `batch_len = sequence.len() / batch_size`. The trailing remainder
/// is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchMatrix<T: TokenType> {
    data: Array2<T>,
}

impl<T: TokenType> BatchMatrix<T> {
    /// Reshape a sequence into `batch_size` rows.
    ///
    /// ## Arguments
    /// * `sequence` - The encoded sequence.
    /// * `batch_size` - The number of rows; must be positive.
    ///
    /// ## Panics
    /// If `batch_size == 0`; [`crate::batching::WindowOptions::windows`]
    /// reports that as an error instead.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(sequence)))]
    pub fn from_sequence(
        sequence: &[T],
        batch_size: usize,
    ) -> Self {
        assert!(batch_size > 0, "batch_size must be positive");
        let batch_len = sequence.len() / batch_size;
        let data = Array2::from_shape_fn((batch_size, batch_len), |(i, j)| {
            sequence[i * batch_len + j]
        });
        Self { data }
    }

    /// The number of rows.
    pub fn batch_size(&self) -> usize {
        self.data.nrows()
    }

    /// The length of each row.
    pub fn batch_len(&self) -> usize {
        self.data.ncols()
    }

    /// The number of window pairs available at `num_steps` columns each.
    ///
    /// This is `(batch_len - 1) / num_steps`, saturating at 0.
    pub fn epoch_size(
        &self,
        num_steps: usize,
    ) -> usize {
        self.batch_len().saturating_sub(1) / num_steps
    }

    /// View the matrix.
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Release the matrix.
    pub fn into_inner(self) -> Array2<T> {
        self.data
    }
}
