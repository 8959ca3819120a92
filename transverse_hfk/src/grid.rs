//! Grid diagrams: a pair of permutations marking X and O decorations on an
//! N-by-N torus, plus the two distinguished states (`ll`, `ur`) every
//! decision procedure is seeded from.

use crate::arith::modulo;
use crate::error::GridError;
use crate::state::{validate_permutation, State};

/// An N-by-N grid diagram: two permutations of `1..=N`, one marking the
/// X decorations and one marking the O decorations, disjoint in every
/// column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    xs: Vec<u8>,
    os: Vec<u8>,
}

impl Grid {
    /// Builds a grid from its X and O permutations, checking both the
    /// permutation invariant and the no-shared-column invariant.
    pub fn new(xs: Vec<u8>, os: Vec<u8>) -> Result<Self, GridError> {
        if xs.len() != os.len() {
            return Err(GridError::LengthMismatch(xs.len(), os.len()));
        }
        if xs.len() < 2 {
            return Err(GridError::ArcIndexTooSmall(xs.len()));
        }
        validate_permutation(&xs)?;
        validate_permutation(&os)?;
        for (i, (&x, &o)) in xs.iter().zip(os.iter()).enumerate() {
            if x == o {
                return Err(GridError::ColumnCollision(i));
            }
        }
        Ok(Grid { xs, os })
    }

    pub fn arc_index(&self) -> usize {
        self.xs.len()
    }

    pub fn xs(&self) -> &[u8] {
        &self.xs
    }

    pub fn os(&self) -> &[u8] {
        &self.os
    }

    /// Checks that `state` is a permutation of the right length; does not
    /// otherwise relate it to the grid's own markings.
    pub fn validate_state(&self, state: &[u8]) -> Result<(), GridError> {
        if state.len() != self.arc_index() {
            return Err(GridError::LengthMismatch(state.len(), self.arc_index()));
        }
        validate_permutation(state)
    }

    /// The canonical "lower-left" state: the grid's own X permutation.
    pub fn ll(&self) -> State {
        State::from_valid(self.xs.clone())
    }

    /// The "upper-right" state: `X` shifted diagonally by one column.
    pub fn ur(&self) -> State {
        let n = self.arc_index() as i64;
        let mut ur = vec![0u8; self.arc_index()];
        ur[0] = (modulo(self.xs[self.arc_index() - 1] as i64, n) + 1) as u8;
        for i in 1..self.arc_index() {
            ur[i] = (modulo(self.xs[i - 1] as i64, n) + 1) as u8;
        }
        State::from_valid(ur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_column_collision() {
        assert!(Grid::new(vec![1, 2], vec![1, 2]).is_err());
    }

    #[test]
    fn rejects_too_small() {
        assert!(Grid::new(vec![1], vec![1]).is_err());
    }

    #[test]
    fn accepts_unknot_grid() {
        let g = Grid::new(vec![1, 2], vec![2, 1]).unwrap();
        assert_eq!(g.ll().as_slice(), &[1, 2]);
    }

    #[test]
    fn ur_is_a_valid_state() {
        let g = Grid::new(vec![1, 2, 3, 4, 5], vec![2, 3, 4, 5, 1]).unwrap();
        let ur = g.ur();
        g.validate_state(ur.as_slice()).unwrap();
    }
}
