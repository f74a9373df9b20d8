//! Positional index into the displayed residence list.

use std::fmt;

/// A position in a list, convertible between zero- and one-based forms.
///
/// Users type one-based indices; storage uses zero-based ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Returns `None` for `0`, which is not a valid one-based index.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversions() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
        assert_eq!(index, Index::from_zero_based(2));
        assert!(Index::from_one_based(0).is_none());
    }
}
