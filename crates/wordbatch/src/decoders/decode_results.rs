//! # Decode Results

use crate::errors::{WBResult, WordbatchError};

/// The result of decoding tokens into words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult<V> {
    /// The remaining token count.
    pub remaining: Option<usize>,

    /// The decoded result.
    pub value: V,
}

impl<V> DecodeResult<V> {
    /// Construct a new result.
    pub fn new(
        value: V,
        remaining: Option<usize>,
    ) -> Self {
        let remaining = remaining.filter(|&r| r > 0);
        Self { value, remaining }
    }

    /// Try to unwrap the result, returning an error if the decoding is incomplete.
    pub fn try_result(self) -> WBResult<V> {
        if let Some(remaining) = self.remaining
            && remaining > 0
        {
            return Err(WordbatchError::IncompleteDecode { remaining });
        }
        Ok(self.value)
    }

    /// Returns `true` if the decoding is complete.
    pub fn is_complete(&self) -> bool {
        self.remaining.is_none()
    }

    /// Convert the result using a conversion function.
    pub fn convert<F, U>(
        self,
        f: F,
    ) -> DecodeResult<U>
    where
        F: FnOnce(V) -> U,
    {
        DecodeResult {
            remaining: self.remaining,
            value: f(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete() {
        let res = DecodeResult::new(vec!["a"], Some(0));
        assert!(res.is_complete());
        assert_eq!(res.remaining, None);
        assert_eq!(res.try_result().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_incomplete() {
        let res = DecodeResult::new(vec!["a"], Some(2));
        assert!(!res.is_complete());
        assert!(matches!(
            res.try_result(),
            Err(WordbatchError::IncompleteDecode { remaining: 2 })
        ));
    }

    #[test]
    fn test_convert() {
        let res = DecodeResult::new(vec!["a", "b"], None).convert(|v| v.join(" "));
        assert_eq!(res.value, "a b");
        assert!(res.is_complete());
    }
}
