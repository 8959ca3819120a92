//! Grid states: permutations of `1..=N` over positions `0..N`, with the
//! lexicographic total order used both as a sort key and as the key of the
//! "already seen" sets that back the BFS in [`crate::driver`].

use std::fmt;

use crate::error::GridError;

/// A permutation of `1..=N` over positions `0..N`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(Vec<u8>);

impl State {
    /// Validates that `values` is a permutation of `1..=values.len()`.
    pub fn new(values: Vec<u8>) -> Result<Self, GridError> {
        validate_permutation(&values)?;
        Ok(State(values))
    }

    /// Constructs a state without checking the permutation invariant.
    /// Callers must have validated `values` themselves (e.g. by swapping
    /// columns of an already-valid state).
    pub(crate) fn from_valid(values: Vec<u8>) -> Self {
        State(values)
    }

    pub fn arc_index(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn swap_cols(&self, i: usize, j: usize) -> State {
        State::from_valid(crate::arith::swap_cols(i, j, &self.0))
    }
}

impl std::ops::Index<usize> for State {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.0[i]
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, v) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Checks that `values` contains each of `1..=values.len()` exactly once.
pub fn validate_permutation(values: &[u8]) -> Result<(), GridError> {
    let n = values.len();
    let mut seen = vec![false; n];
    for &v in values {
        let v = v as usize;
        if v == 0 || v > n || seen[v - 1] {
            return Err(GridError::NotAPermutation(format!("{values:?}"), n));
        }
        seen[v - 1] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_permutation() {
        assert!(State::new(vec![1, 2, 3]).is_ok());
    }

    #[test]
    fn rejects_repeated_value() {
        assert!(State::new(vec![1, 1, 3]).is_err());
    }

    #[test]
    fn rejects_out_of_range_value() {
        assert!(State::new(vec![1, 2, 4]).is_err());
    }

    #[test]
    fn total_order_is_lexicographic() {
        let a = State::new(vec![1, 2, 3]).unwrap();
        let b = State::new(vec![1, 3, 2]).unwrap();
        assert!(a < b);
    }
}
