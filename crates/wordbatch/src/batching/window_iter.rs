//! # Window Pair Iteration

use core::iter::FusedIterator;

use ndarray::{Array2, s};

use crate::{
    batching::BatchMatrix,
    errors::{WBResult, WordbatchError},
    types::TokenType,
};

/// Options for windowing an encoded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOptions {
    /// The number of parallel streams (rows).
    pub batch_size: usize,

    /// The unroll length (columns per window).
    pub num_steps: usize,
}

impl WindowOptions {
    /// Create new options.
    pub fn new(
        batch_size: usize,
        num_steps: usize,
    ) -> Self {
        Self {
            batch_size,
            num_steps,
        }
    }

    /// Set the batch size.
    pub fn with_batch_size(
        self,
        batch_size: usize,
    ) -> Self {
        Self { batch_size, ..self }
    }

    /// Set the unroll length.
    pub fn with_num_steps(
        self,
        num_steps: usize,
    ) -> Self {
        Self { num_steps, ..self }
    }

    /// The number of window pairs a sequence of `data_len` ids yields.
    ///
    /// Returns 0 for a zero `batch_size` or `num_steps`.
    pub fn epoch_size(
        &self,
        data_len: usize,
    ) -> usize {
        if self.batch_size == 0 || self.num_steps == 0 {
            return 0;
        }
        (data_len / self.batch_size).saturating_sub(1) / self.num_steps
    }

    fn invalid(
        &self,
        data_len: usize,
        reason: &'static str,
    ) -> WordbatchError {
        WordbatchError::InvalidConfiguration {
            reason,
            data_len,
            batch_size: self.batch_size,
            num_steps: self.num_steps,
        }
    }

    /// Window a sequence.
    ///
    /// The sequence is reshaped eagerly into a [`BatchMatrix`];
    /// the pairs are then sliced from it lazily.
    ///
    /// ## Arguments
    /// * `sequence` - The encoded sequence.
    ///
    /// ## Returns
    /// A [`WindowIter`] over `epoch_size` pairs; or
    /// [`WordbatchError::InvalidConfiguration`] if `epoch_size == 0`.
    pub fn windows<T: TokenType>(
        &self,
        sequence: &[T],
    ) -> WBResult<WindowIter<T>> {
        let data_len = sequence.len();
        if self.batch_size == 0 {
            return Err(self.invalid(data_len, "batch_size must be positive"));
        }
        if self.num_steps == 0 {
            return Err(self.invalid(data_len, "num_steps must be positive"));
        }

        let epoch_size = self.epoch_size(data_len);
        if epoch_size == 0 {
            return Err(self.invalid(
                data_len,
                "epoch_size == 0, decrease batch_size or num_steps",
            ));
        }

        let matrix = BatchMatrix::from_sequence(sequence, self.batch_size);
        log::debug!(
            "windowing {data_len} ids: batch_len={}, epoch_size={epoch_size}",
            matrix.batch_len()
        );

        Ok(WindowIter {
            data: matrix.into_inner(),
            num_steps: self.num_steps,
            epoch_size,
            step: 0,
        })
    }
}

/// Window a sequence into shifted ``(x, y)`` pairs.
///
/// See [`WindowOptions::windows`].
///
/// ## Arguments
/// * `raw_data` - The encoded sequence.
/// * `batch_size` - The number of parallel streams.
/// * `num_steps` - The unroll length.
pub fn data_iterator<T: TokenType>(
    raw_data: &[T],
    batch_size: usize,
    num_steps: usize,
) -> WBResult<WindowIter<T>> {
    WindowOptions::new(batch_size, num_steps).windows(raw_data)
}

/// One training step's input and next-token target.
///
/// Both are `[batch_size, num_steps]`; `y` is `x` shifted one position later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPair<T: TokenType> {
    /// The inputs.
    pub x: Array2<T>,

    /// The targets.
    pub y: Array2<T>,
}

impl<T: TokenType> WindowPair<T> {
    /// Split into the ``(x, y)`` tuple.
    pub fn into_parts(self) -> (Array2<T>, Array2<T>) {
        (self.x, self.y)
    }
}

/// Lazy iterator over the window pairs of one [`BatchMatrix`].
///
/// Finite and not restartable; window the sequence again for another pass.
#[derive(Debug, Clone)]
pub struct WindowIter<T: TokenType> {
    data: Array2<T>,
    num_steps: usize,
    epoch_size: usize,
    step: usize,
}

impl<T: TokenType> WindowIter<T> {
    /// The total number of pairs in the pass.
    pub fn epoch_size(&self) -> usize {
        self.epoch_size
    }

    /// The unroll length.
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// The underlying batch matrix, `[batch_size, batch_len]`.
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }
}

impl<T: TokenType> Iterator for WindowIter<T> {
    type Item = WindowPair<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.epoch_size {
            return None;
        }
        let start = self.step * self.num_steps;
        let end = start + self.num_steps;
        self.step += 1;

        Some(WindowPair {
            x: self.data.slice(s![.., start..end]).to_owned(),
            y: self.data.slice(s![.., start + 1..end + 1]).to_owned(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.epoch_size - self.step;
        (remaining, Some(remaining))
    }
}

impl<T: TokenType> ExactSizeIterator for WindowIter<T> {}

impl<T: TokenType> FusedIterator for WindowIter<T> {}
