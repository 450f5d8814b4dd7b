//! # Minibatch Windowing
//!
//! An encoded sequence is reshaped into a `[batch_size, batch_len]`
//! [`BatchMatrix`] of parallel streams, then walked in `num_steps` column
//! windows. Each [`WindowPair`] holds the inputs `x` and the next-token
//! targets `y`, which is `x` shifted one column later.
//!
//! A pass yields `epoch_size = (batch_len - 1) / num_steps` pairs. Ids past
//! `batch_size * batch_len`, and columns past the last full window, are
//! never visited. A pass with no pairs is an error, not an empty iterator.
//!
//! ```rust
//! use wordbatch::batching::data_iterator;
//!
//! let seq: Vec<u32> = (1..=9).collect();
//! let pairs: Vec<_> = data_iterator(&seq, 3, 2).unwrap().collect();
//!
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].x.row(1).to_vec(), vec![4, 5]);
//! assert_eq!(pairs[0].y.row(1).to_vec(), vec![5, 6]);
//!
//! assert!(data_iterator(&seq[..5], 3, 5).is_err());
//! ```

pub mod batch_matrix;
pub mod window_iter;

#[doc(inline)]
pub use batch_matrix::BatchMatrix;
#[doc(inline)]
pub use window_iter::{WindowIter, WindowOptions, WindowPair, data_iterator};
