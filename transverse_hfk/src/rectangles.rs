//! Rectangle enumerators: the "empty rectangle" moves between grid states.
//!
//! The "indexed" variants additionally return the `(start_column,
//! end_column)` pair a rectangle was found at; [`crate::lift`] uses that to
//! decide whether a rectangle crosses the branch cut at column 0.

use std::collections::BTreeSet;

use crate::arith::{modulo, modulo_up, swap_cols};
use crate::grid::Grid;
use crate::state::State;

/// All outgoing empty rectangles from `s`, tagged with the `(start, end)`
/// column pair each was discovered at.
pub fn rectangles_out_of_indexed(grid: &Grid, s: &State) -> Vec<(usize, usize, State)> {
    let n = grid.arc_index() as i64;
    let mut ans = Vec::new();
    for ll in 0..grid.arc_index() {
        let mut h = modulo(grid.os()[ll] as i64 - s[ll] as i64, n)
            .min(modulo(grid.xs()[ll] as i64 - s[ll] as i64, n));
        let mut w = 1i64;
        while w < n && h > 0 {
            let col = modulo(ll as i64 + w, n) as usize;
            if modulo(s[col] as i64 - s[ll] as i64, n) <= h {
                ans.push((ll, col, State::from_valid(swap_cols(ll, col, s.as_slice()))));
                h = modulo(s[col] as i64 - s[ll] as i64, n);
            }
            h = h
                .min(modulo(grid.os()[col] as i64 - s[ll] as i64, n))
                .min(modulo(grid.xs()[col] as i64 - s[ll] as i64, n));
            w += 1;
        }
    }
    ans
}

/// All incoming empty rectangles into `s`, tagged the same way as
/// [`rectangles_out_of_indexed`].
pub fn rectangles_into_indexed(grid: &Grid, s: &State) -> Vec<(usize, usize, State)> {
    let n = grid.arc_index() as i64;
    let mut ans = Vec::new();
    for ll in 0..grid.arc_index() {
        let mut h = modulo_up(s[ll] as i64 - grid.os()[ll] as i64, n)
            .min(modulo_up(s[ll] as i64 - grid.xs()[ll] as i64, n));
        let mut w = 1i64;
        while w < n && h > 0 {
            let col = modulo(ll as i64 + w, n) as usize;
            if modulo_up(s[ll] as i64 - s[col] as i64, n) < h {
                ans.push((ll, col, State::from_valid(swap_cols(ll, col, s.as_slice()))));
                h = modulo_up(s[ll] as i64 - s[col] as i64, n);
            }
            h = h
                .min(modulo_up(s[ll] as i64 - grid.os()[col] as i64, n))
                .min(modulo_up(s[ll] as i64 - grid.xs()[col] as i64, n));
            w += 1;
        }
    }
    ans
}

/// All states reachable from `s` by one outgoing empty rectangle.
pub fn rectangles_out_of(grid: &Grid, s: &State) -> Vec<State> {
    rectangles_out_of_indexed(grid, s)
        .into_iter()
        .map(|(_, _, t)| t)
        .collect()
}

/// All states that reach `s` by one incoming empty rectangle.
pub fn rectangles_into(grid: &Grid, s: &State) -> Vec<State> {
    rectangles_into_indexed(grid, s)
        .into_iter()
        .map(|(_, _, t)| t)
        .collect()
}

/// Mod-2 XOR of `t` into `acc`: first occurrence inserts, second removes.
fn xor_into(acc: &mut BTreeSet<State>, t: State) {
    if !acc.insert(t.clone()) {
        acc.remove(&t);
    }
}

/// Outgoing empty rectangles from `s` whose target is not already in
/// `seen`, with duplicate targets within this call cancelling mod 2.
pub fn new_rectangles_out_of(grid: &Grid, seen: &BTreeSet<State>, s: &State) -> Vec<State> {
    let mut acc = BTreeSet::new();
    for (_, _, t) in rectangles_out_of_indexed(grid, s) {
        if !seen.contains(&t) {
            xor_into(&mut acc, t);
        }
    }
    acc.into_iter().collect()
}

/// Incoming empty rectangles into `s` whose source is not already in
/// `seen`, with duplicate sources within this call cancelling mod 2.
pub fn new_rectangles_into(grid: &Grid, seen: &BTreeSet<State>, s: &State) -> Vec<State> {
    let mut acc = BTreeSet::new();
    for (_, _, t) in rectangles_into_indexed(grid, s) {
        if !seen.contains(&t) {
            xor_into(&mut acc, t);
        }
    }
    acc.into_iter().collect()
}

/// Outgoing rectangles from `s` that contain exactly `wt` X-markings
/// strictly between `s[ll]` and `s[col]` in height; `wt = 1` seeds D1.
pub fn fixed_wt_rectangles_out_of(grid: &Grid, wt: i64, s: &State) -> Vec<State> {
    let n = grid.arc_index() as i64;
    let mut acc = BTreeSet::new();
    for ll in 0..grid.arc_index() {
        let mut h = modulo(grid.os()[ll] as i64 - s[ll] as i64, n);
        let mut w = 1i64;
        while w < n && h > 0 {
            let col = modulo(ll as i64 + w, n) as usize;
            let height = modulo(s[col] as i64 - s[ll] as i64, n);
            if height <= h {
                let mut weight = 0i64;
                let mut i = 0i64;
                while i < w && weight <= wt + 1 {
                    let idx = modulo(ll as i64 + i, n) as usize;
                    if modulo(grid.xs()[idx] as i64 - s[ll] as i64, n) < height {
                        weight += 1;
                    }
                    i += 1;
                }
                if weight == wt {
                    let t = State::from_valid(swap_cols(ll, col, s.as_slice()));
                    xor_into(&mut acc, t);
                }
                h = height;
            }
            h = h.min(modulo(grid.os()[col] as i64 - s[ll] as i64, n));
            w += 1;
        }
    }
    acc.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn unknot() -> Grid {
        Grid::new(vec![1, 2], vec![2, 1]).unwrap()
    }

    #[test]
    fn n2_has_at_most_one_rectangle_per_column() {
        let g = unknot();
        let ll = g.ll();
        let outs = rectangles_out_of_indexed(&g, &ll);
        let mut seen_starts = BTreeSet::new();
        for (start, _, _) in &outs {
            assert!(seen_starts.insert(*start), "duplicate start column {start}");
        }
        let ins = rectangles_into_indexed(&g, &ll);
        let mut seen_starts = BTreeSet::new();
        for (start, _, _) in &ins {
            assert!(seen_starts.insert(*start), "duplicate start column {start}");
        }
    }

    #[test]
    fn out_of_and_into_are_symmetric() {
        let g = Grid::new(vec![1, 2, 3, 4, 5], vec![2, 3, 4, 5, 1]).unwrap();
        let s = g.ll();
        for t in rectangles_out_of(&g, &s) {
            assert!(rectangles_into(&g, &t).contains(&s));
        }
        for t in rectangles_into(&g, &s) {
            assert!(rectangles_out_of(&g, &t).contains(&s));
        }
    }

    #[test]
    fn new_variant_drops_already_seen_states() {
        let g = Grid::new(vec![1, 2, 3, 4, 5], vec![2, 3, 4, 5, 1]).unwrap();
        let s = g.ll();
        let all: BTreeSet<State> = rectangles_out_of(&g, &s).into_iter().collect();
        let seen: BTreeSet<State> = all.iter().cloned().collect();
        assert!(new_rectangles_out_of(&g, &seen, &s).is_empty());
    }

    #[test]
    fn fixed_weight_one_is_subset_of_all_outgoing() {
        let g = Grid::new(vec![1, 2, 3, 4, 5], vec![2, 3, 4, 5, 1]).unwrap();
        let s = g.ll();
        let all: BTreeSet<State> = rectangles_out_of(&g, &s).into_iter().collect();
        for t in fixed_wt_rectangles_out_of(&g, 1, &s) {
            assert!(all.contains(&t));
        }
    }
}
