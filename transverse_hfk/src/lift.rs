//! The n-sheet cyclic branched cover: lift grids, lift states, and the
//! per-sheet rectangle rule that generalizes [`crate::rectangles`] to them.
//!
//! A lift state's seen-set ordering is lexicographic over sheets, each sheet
//! itself lexicographic, which a derived `Ord` over `Vec<State>` gives for
//! free; a `BTreeSet` keyed on it behaves like the balanced tree a dense
//! BFS frontier needs.
//!
//! A lift rectangle acts on exactly one sheet's own `(X, O)` markings at a
//! time; where that rectangle's width wraps past column 0 (crossing the
//! basepoint shared by every sheet), its swap is threaded into the *next*
//! sheet, mod `n`, instead of its own.

use std::collections::BTreeSet;

use crate::error::GridError;
use crate::grid::Grid;
use crate::rectangles::{rectangles_into_indexed, rectangles_out_of_indexed};
use crate::state::State;

/// A grid diagram shared across every sheet of an n-sheet cover: one `(X, O)`
/// marking pair, plus the sheet count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiftGrid {
    grid: Grid,
    sheets: i64,
}

impl LiftGrid {
    /// Builds an n-sheet lift grid. `sheets` must be at least 1; the
    /// underlying X/O permutations are validated the same way [`Grid::new`]
    /// validates them.
    pub fn new(xs: Vec<u8>, os: Vec<u8>, sheets: i64) -> Result<Self, GridError> {
        if sheets < 1 {
            return Err(GridError::InvalidSheetCount(sheets));
        }
        Ok(LiftGrid {
            grid: Grid::new(xs, os)?,
            sheets,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn sheets(&self) -> i64 {
        self.sheets
    }

    pub fn arc_index(&self) -> usize {
        self.grid.arc_index()
    }

    /// The lift state with every sheet at the grid's lower-left state.
    pub fn ll(&self) -> LiftState {
        LiftState(vec![self.grid.ll(); self.sheets as usize])
    }

    /// The lift state with every sheet at the grid's upper-right state.
    pub fn ur(&self) -> LiftState {
        LiftState(vec![self.grid.ur(); self.sheets as usize])
    }

    /// Checks that `state` has one component per sheet, each a valid state
    /// of the underlying grid.
    pub fn validate_state(&self, state: &LiftState) -> Result<(), GridError> {
        if state.0.len() != self.sheets as usize {
            return Err(GridError::InvalidSheetCount(state.0.len() as i64));
        }
        for sheet in &state.0 {
            self.grid.validate_state(sheet.as_slice())?;
        }
        Ok(())
    }
}

/// A point in the n-sheet cover: one ordinary [`State`] per sheet. Ordered
/// lexicographically, sheet by sheet.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LiftState(Vec<State>);

impl LiftState {
    /// Builds a lift state directly from its per-sheet components. Callers
    /// (e.g. the C ABI adapter) are responsible for pairing it with a
    /// [`LiftGrid::validate_state`] call before treating it as valid.
    pub fn new(sheets: Vec<State>) -> LiftState {
        LiftState(sheets)
    }

    pub fn sheets(&self) -> &[State] {
        &self.0
    }

    pub fn sheet(&self, k: usize) -> &State {
        &self.0[k]
    }

    fn with_sheet_replaced(&self, k: usize, value: State) -> LiftState {
        let mut sheets = self.0.clone();
        sheets[k] = value;
        LiftState(sheets)
    }
}

/// Mod-2 XOR of `t` into `acc`.
impl From<Vec<State>> for LiftState {
    fn from(sheets: Vec<State>) -> LiftState {
        LiftState(sheets)
    }
}

fn xor_into(acc: &mut BTreeSet<LiftState>, t: LiftState) {
    if !acc.insert(t.clone()) {
        acc.remove(&t);
    }
}

/// The ordinary (non-branching) family: rectangles whose width stays inside
/// `0..arc_index` without wrapping past column 0. Each produces a successor
/// that replaces exactly the sheet the rectangle was found on.
pub fn lift_rectangles_out_of(grid: &LiftGrid, s: &LiftState) -> Vec<LiftState> {
    let mut acc = BTreeSet::new();
    for k in 0..grid.sheets() as usize {
        for (start, col, target) in rectangles_out_of_indexed(grid.grid(), s.sheet(k)) {
            if col > start {
                xor_into(&mut acc, s.with_sheet_replaced(k, target));
            }
        }
    }
    acc.into_iter().collect()
}

/// The branching family: rectangles whose width wraps past column 0. Each
/// one's swap is threaded into sheet `(k + 1) mod n` rather than sheet `k`.
pub fn lift_rectangles_branching(grid: &LiftGrid, s: &LiftState) -> Vec<LiftState> {
    let n = grid.sheets() as usize;
    let mut acc = BTreeSet::new();
    for k in 0..n {
        for (start, col, target) in rectangles_out_of_indexed(grid.grid(), s.sheet(k)) {
            if col < start {
                xor_into(&mut acc, s.with_sheet_replaced((k + 1) % n, target));
            }
        }
    }
    acc.into_iter().collect()
}

/// Every outgoing lift rectangle, ordinary and branching alike, merged mod 2
/// exactly as a single-sheet "new" variant merges its own emissions.
pub fn all_lift_rectangles_out_of(grid: &LiftGrid, s: &LiftState) -> Vec<LiftState> {
    let mut acc: BTreeSet<LiftState> = lift_rectangles_out_of(grid, s).into_iter().collect();
    for t in lift_rectangles_branching(grid, s) {
        xor_into(&mut acc, t);
    }
    acc.into_iter().collect()
}

/// Incoming analogue of [`lift_rectangles_out_of`]: the ordinary family,
/// each predecessor differing from `s` in exactly the sheet the rectangle
/// was found on.
pub fn lift_rectangles_into(grid: &LiftGrid, s: &LiftState) -> Vec<LiftState> {
    let mut acc = BTreeSet::new();
    for k in 0..grid.sheets() as usize {
        for (start, col, source) in rectangles_into_indexed(grid.grid(), s.sheet(k)) {
            if col > start {
                xor_into(&mut acc, s.with_sheet_replaced(k, source));
            }
        }
    }
    acc.into_iter().collect()
}

/// Incoming analogue of [`lift_rectangles_branching`]. A branching move
/// reads sheet `k` and writes its result into sheet `(k + 1) mod n`,
/// discarding whatever was there before; the reverse direction can only
/// recover the sheet that stayed put; it reconstructs sheet `(m - 1) mod n`
/// from a wrapped rectangle into `s`'s sheet `m`, leaving every other sheet,
/// including `m` itself, as `s` already has it.
pub fn lift_rectangles_branching_into(grid: &LiftGrid, s: &LiftState) -> Vec<LiftState> {
    let n = grid.sheets() as usize;
    let mut acc = BTreeSet::new();
    for m in 0..n {
        for (start, col, source) in rectangles_into_indexed(grid.grid(), s.sheet(m)) {
            if col < start {
                let prev = (m + n - 1) % n;
                xor_into(&mut acc, s.with_sheet_replaced(prev, source));
            }
        }
    }
    acc.into_iter().collect()
}

/// The incoming analogue of [`all_lift_rectangles_out_of`].
pub fn all_lift_rectangles_into(grid: &LiftGrid, s: &LiftState) -> Vec<LiftState> {
    let mut acc: BTreeSet<LiftState> = lift_rectangles_into(grid, s).into_iter().collect();
    for t in lift_rectangles_branching_into(grid, s) {
        xor_into(&mut acc, t);
    }
    acc.into_iter().collect()
}

/// Outgoing lift rectangles from `s` whose target is not already in `seen`,
/// with duplicate targets cancelling mod 2 as in [`crate::rectangles::new_rectangles_out_of`].
pub fn new_lift_rectangles_out_of(
    grid: &LiftGrid,
    seen: &BTreeSet<LiftState>,
    s: &LiftState,
) -> Vec<LiftState> {
    let mut acc = BTreeSet::new();
    for t in all_lift_rectangles_out_of(grid, s) {
        if !seen.contains(&t) {
            xor_into(&mut acc, t);
        }
    }
    acc.into_iter().collect()
}

/// Incoming analogue of [`new_lift_rectangles_out_of`].
pub fn new_lift_rectangles_into(
    grid: &LiftGrid,
    seen: &BTreeSet<LiftState>,
    s: &LiftState,
) -> Vec<LiftState> {
    let mut acc = BTreeSet::new();
    for t in all_lift_rectangles_into(grid, s) {
        if !seen.contains(&t) {
            xor_into(&mut acc, t);
        }
    }
    acc.into_iter().collect()
}
