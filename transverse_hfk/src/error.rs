use thiserror::Error;

/// Everything that can go wrong building or validating a [`crate::grid::Grid`],
/// a state, or a lift, plus the one internal invariant violation that is
/// promoted to a hard error instead of being silently tolerated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("`{0}` is not a permutation of 1..={1}")]
    NotAPermutation(String, usize),

    #[error("Xs and Os have different lengths ({0} vs {1})")]
    LengthMismatch(usize, usize),

    #[error("column {0} has the same marking in Xs and Os")]
    ColumnCollision(usize),

    #[error("arc index must be at least 2, got {0}")]
    ArcIndexTooSmall(usize),

    #[error("sheet count must be at least 1, got {0}")]
    InvalidSheetCount(i64),

    #[error("malformed permutation syntax: {0}")]
    MalformedPermutation(String),

    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}
