//! Grid/invariant printing: ASCII grid diagrams, NESW counting functions, and
//! the `2A=M=SL+1` self-linking line.
//!
//! None of this is on the decision procedures' hot path; it exists purely to
//! support CLI progress/diagram output and carries no text-stability
//! guarantee. The Thurston-Bennequin/rotation-number invariant is not
//! implemented here, only the self-linking-number line, since no reliable
//! source for its computation was available to ground it on.

use std::io;

use crate::grid::Grid;
use crate::state::State;

/// Counts pairs `(i, j)` with `i <= j` and `x[i] <= Os[j]`.
pub fn nesw_po(grid: &Grid, x: &[u8]) -> i64 {
    let os = grid.os();
    let mut ans = 0i64;
    for i in 0..x.len() {
        for j in i..x.len() {
            if x[i] <= os[j] {
                ans += 1;
            }
        }
    }
    ans
}

/// Counts pairs `(i, j)` with `i < j` and `Os[i] < x[j]`.
pub fn nesw_op(grid: &Grid, x: &[u8]) -> i64 {
    let os = grid.os();
    let mut ans = 0i64;
    for i in 0..x.len() {
        for j in (i + 1)..x.len() {
            if os[i] < x[j] {
                ans += 1;
            }
        }
    }
    ans
}

/// Counts pairs `(i, j)` with `i <= j` and `x[i] < x[j]`.
pub fn nesw_pp(grid: &Grid, x: &[u8]) -> i64 {
    let mut ans = 0i64;
    for i in 0..x.len() {
        for j in i..x.len() {
            if x[i] < x[j] {
                ans += 1;
            }
        }
    }
    ans
}

/// `2A = M = SL + 1`, where `SL` is the self-linking number of the grid's own
/// `X` markings. `self_linking_number` exposes `SL` itself as a returned
/// value rather than only a printed one.
pub fn self_linking_number(grid: &Grid) -> i64 {
    nesw_pp(grid, grid.xs()) - nesw_po(grid, grid.xs()) - nesw_op(grid, grid.xs())
        + nesw_pp(grid, grid.os())
}

/// `2A = M = SL + 1`.
pub fn two_a_equals_m_equals_sl_plus_one(grid: &Grid) -> i64 {
    self_linking_number(grid) + 1
}

/// Renders the N-by-N torus as a monospace ASCII table, one 5-character cell
/// per column per row, marking `X`, `O`, or `-`. Writes to a generic sink
/// rather than a process-wide stream so callers can redirect or suppress it.
pub fn print_grid(grid: &Grid, out: &mut dyn io::Write) -> io::Result<()> {
    let n = grid.arc_index() as u8;
    let mut row = n;
    while row > 0 {
        for i in 0..grid.arc_index() {
            if grid.xs()[i] == row {
                write!(out, "  X  ")?;
            } else if grid.os()[i] == row {
                write!(out, "  O  ")?;
            } else {
                write!(out, "  -  ")?;
            }
        }
        writeln!(out)?;
        row -= 1;
    }
    Ok(())
}

/// Renders the same grid as [`print_grid`], with a `*` marking `state`'s
/// occupied cell in each row (the state half of `PrintState`), followed by
/// the `2A=M=SL+1=…` line.
pub fn print_state(grid: &Grid, state: &State, out: &mut dyn io::Write) -> io::Result<()> {
    let n = grid.arc_index() as u8;
    let mut row = n;
    while row > 0 {
        for i in 0..grid.arc_index() {
            if grid.xs()[i] == row {
                write!(out, "  X  ")?;
            } else if grid.os()[i] == row {
                write!(out, "  O  ")?;
            } else {
                write!(out, "  -  ")?;
            }
        }
        writeln!(out)?;
        for i in 0..grid.arc_index() {
            if state[i] == row {
                write!(out, "*    ")?;
            } else {
                write!(out, "     ")?;
            }
        }
        writeln!(out)?;
        row -= 1;
    }
    writeln!(out)?;
    writeln!(out, "2A=M=SL+1={}", two_a_equals_m_equals_sl_plus_one(grid))
}

/// The compact `{a,b,c,...}` rendition, matching `PrintStateShort`.
pub fn print_state_short(state: &State, out: &mut dyn io::Write) -> io::Result<()> {
    write!(out, "{{")?;
    let s = state.as_slice();
    for (i, v) in s.iter().enumerate() {
        if i + 1 < s.len() {
            write!(out, "{v},")?;
        } else {
            write!(out, "{v}")?;
        }
    }
    write!(out, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unknot() -> Grid {
        Grid::new(vec![1, 2], vec![2, 1]).unwrap()
    }

    #[test]
    fn nesw_counts_are_non_negative_on_the_unknot() {
        let g = unknot();
        assert!(nesw_po(&g, g.xs()) >= 0);
        assert!(nesw_op(&g, g.xs()) >= 0);
        assert!(nesw_pp(&g, g.xs()) >= 0);
    }

    #[test]
    fn print_grid_emits_one_line_per_row() {
        let g = unknot();
        let mut buf = Vec::new();
        print_grid(&g, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn print_state_includes_the_invariant_line() {
        let g = unknot();
        let ll = g.ll();
        let mut buf = Vec::new();
        print_state(&g, &ll, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("2A=M=SL+1="));
    }

    #[test]
    fn print_state_short_matches_bracketed_form() {
        let g = unknot();
        let mut buf = Vec::new();
        print_state_short(&g.ll(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{1,2}");
    }
}
