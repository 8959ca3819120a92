//! C language interface to `transverse_hfk`.
//!
//! Built with `cargo-c` conventions. Exposes
//! `null_homologous_D0Q`/`null_homologous_D1Q`/`null_homologous_lift` as
//! plain `extern "C"` functions using a `(..., status_out: *mut i32) -> i32`
//! convention: every entry point writes a [`ThfkStatus`] code to
//! `status_out`, and the returned boolean is only meaningful when that
//! status is `Ok`.

use std::slice;

use transverse_hfk::{Grid, LiftGrid, LiftState, State};

/// Status codes written to the `status` out-parameter of every
/// `thfk_*` entry point.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThfkStatus {
    /// The call succeeded; the returned boolean is meaningful.
    Ok = 0,
    /// A pointer argument was null.
    NullPointer = 1,
    /// `xs`/`os` do not form a valid grid (not permutations, or
    /// `xs[i] == os[i]` for some column).
    InvalidGrid = 2,
    /// `state` is not a permutation of `1..=arc_index`.
    InvalidState = 3,
    /// `sheets < 1`.
    InvalidSheetCount = 4,
}

fn bool_to_i32(b: bool) -> i32 {
    if b {
        1
    } else {
        0
    }
}

/// Builds a [`Grid`] from raw `xs`/`os` pointers, each `arc_index` bytes
/// long. Returns `None` and writes the matching status on failure.
///
/// # Safety
/// `xs` and `os` must each point to at least `arc_index` readable `u8`s.
unsafe fn grid_from_raw(
    arc_index: usize,
    xs: *const u8,
    os: *const u8,
    status: *mut i32,
) -> Option<Grid> {
    if xs.is_null() || os.is_null() || status.is_null() {
        if !status.is_null() {
            *status = ThfkStatus::NullPointer as i32;
        }
        return None;
    }

    let xs = slice::from_raw_parts(xs, arc_index).to_vec();
    let os = slice::from_raw_parts(os, arc_index).to_vec();

    match Grid::new(xs, os) {
        Ok(grid) => Some(grid),
        Err(_) => {
            *status = ThfkStatus::InvalidGrid as i32;
            None
        }
    }
}

/// Builds a [`State`] from a raw pointer, validating it against `grid`.
///
/// # Safety
/// `state` must point to at least `grid.arc_index()` readable `u8`s.
unsafe fn state_from_raw(grid: &Grid, state: *const u8, status: *mut i32) -> Option<State> {
    if state.is_null() {
        *status = ThfkStatus::NullPointer as i32;
        return None;
    }

    let values = slice::from_raw_parts(state, grid.arc_index()).to_vec();
    match grid.validate_state(&values) {
        Ok(()) => Some(State::new(values).unwrap()),
        Err(_) => {
            *status = ThfkStatus::InvalidState as i32;
            None
        }
    }
}

/// Decides whether `state` is null-homologous in the D0 differential.
/// Writes a [`ThfkStatus`] to `*status` and returns `0`/`1` for the boolean;
/// the return value is meaningless unless `*status == ThfkStatus::Ok`.
///
/// # Safety
/// `xs`, `os`, and `state` must each point to at least `arc_index` readable
/// `u8`s; `status` must point to one writable `i32`.
#[no_mangle]
pub unsafe extern "C" fn thfk_null_homologous_d0q(
    arc_index: usize,
    xs: *const u8,
    os: *const u8,
    state: *const u8,
    status: *mut i32,
) -> i32 {
    if status.is_null() {
        return 0;
    }
    *status = ThfkStatus::Ok as i32;

    let Some(grid) = grid_from_raw(arc_index, xs, os, status) else {
        return 0;
    };
    let Some(state) = state_from_raw(&grid, state, status) else {
        return 0;
    };

    let mut sink = transverse_hfk::verbosity::NullSink;
    bool_to_i32(transverse_hfk::null_homologous_d0q(&grid, &state, &mut sink))
}

/// Decides whether `state` is null-homologous in the D1 differential.
/// Same calling convention as [`thfk_null_homologous_d0q`].
///
/// # Safety
/// Same preconditions as [`thfk_null_homologous_d0q`].
#[no_mangle]
pub unsafe extern "C" fn thfk_null_homologous_d1q(
    arc_index: usize,
    xs: *const u8,
    os: *const u8,
    state: *const u8,
    status: *mut i32,
) -> i32 {
    if status.is_null() {
        return 0;
    }
    *status = ThfkStatus::Ok as i32;

    let Some(grid) = grid_from_raw(arc_index, xs, os, status) else {
        return 0;
    };
    let Some(state) = state_from_raw(&grid, state, status) else {
        return 0;
    };

    let mut sink = transverse_hfk::verbosity::NullSink;
    bool_to_i32(transverse_hfk::null_homologous_d1q(&grid, &state, &mut sink))
}

/// Decides whether the lift state `state` (`sheets * arc_index` bytes,
/// sheet-major) is null-homologous in the n-sheet cyclic cover's
/// differential. Same calling convention as [`thfk_null_homologous_d0q`].
///
/// # Safety
/// `xs`/`os` must each point to at least `arc_index` readable `u8`s;
/// `state` must point to at least `sheets * arc_index` readable `u8`s;
/// `status` must point to one writable `i32`.
#[no_mangle]
pub unsafe extern "C" fn thfk_null_homologous_lift(
    arc_index: usize,
    sheets: i64,
    xs: *const u8,
    os: *const u8,
    state: *const u8,
    status: *mut i32,
) -> i32 {
    if status.is_null() {
        return 0;
    }
    *status = ThfkStatus::Ok as i32;

    if sheets < 1 {
        *status = ThfkStatus::InvalidSheetCount as i32;
        return 0;
    }
    if xs.is_null() || os.is_null() || state.is_null() {
        *status = ThfkStatus::NullPointer as i32;
        return 0;
    }

    let xs_vec = slice::from_raw_parts(xs, arc_index).to_vec();
    let os_vec = slice::from_raw_parts(os, arc_index).to_vec();
    let grid = match LiftGrid::new(xs_vec, os_vec, sheets) {
        Ok(grid) => grid,
        Err(_) => {
            *status = ThfkStatus::InvalidGrid as i32;
            return 0;
        }
    };

    let raw_state = slice::from_raw_parts(state, sheets as usize * arc_index);
    let mut sheet_states = Vec::with_capacity(sheets as usize);
    for chunk in raw_state.chunks_exact(arc_index) {
        match State::new(chunk.to_vec()) {
            Ok(s) => sheet_states.push(s),
            Err(_) => {
                *status = ThfkStatus::InvalidState as i32;
                return 0;
            }
        }
    }
    let lift_state = LiftState::from(sheet_states);
    if grid.validate_state(&lift_state).is_err() {
        *status = ThfkStatus::InvalidState as i32;
        return 0;
    }

    let mut sink = transverse_hfk::verbosity::NullSink;
    bool_to_i32(transverse_hfk::null_homologous_lift(
        &grid,
        &lift_state,
        &mut sink,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknot_ll_is_null_homologous_through_the_c_abi() {
        let xs = [1u8, 2];
        let os = [2u8, 1];
        let mut status = -1;
        let ans = unsafe {
            thfk_null_homologous_d0q(2, xs.as_ptr(), os.as_ptr(), xs.as_ptr(), &mut status)
        };
        assert_eq!(status, ThfkStatus::Ok as i32);
        assert_eq!(ans, 1);
    }

    #[test]
    fn column_collision_is_reported_as_invalid_grid() {
        let xs = [1u8, 1];
        let os = [2u8, 1];
        let mut status = -1;
        let _ = unsafe {
            thfk_null_homologous_d0q(2, xs.as_ptr(), os.as_ptr(), xs.as_ptr(), &mut status)
        };
        assert_eq!(status, ThfkStatus::InvalidGrid as i32);
    }

    #[test]
    fn null_state_pointer_is_reported() {
        let xs = [1u8, 2];
        let os = [2u8, 1];
        let mut status = -1;
        let _ = unsafe {
            thfk_null_homologous_d0q(2, xs.as_ptr(), os.as_ptr(), std::ptr::null(), &mut status)
        };
        assert_eq!(status, ThfkStatus::NullPointer as i32);
    }

    #[test]
    fn lift_of_the_unknot_is_null_homologous_through_the_c_abi() {
        let xs = [1u8, 2];
        let os = [2u8, 1];
        let state = [1u8, 2, 1, 2];
        let mut status = -1;
        let ans = unsafe {
            thfk_null_homologous_lift(
                2,
                2,
                xs.as_ptr(),
                os.as_ptr(),
                state.as_ptr(),
                &mut status,
            )
        };
        assert_eq!(status, ThfkStatus::Ok as i32);
        assert_eq!(ans, 1);
    }
}
