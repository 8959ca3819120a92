//! Ordered, duplicate-free edge lists and their mod-2 (GF(2)) operations.
//!
//! Edges are kept in a sorted `Vec<(i32, i32)>` throughout; insertion and
//! symmetric-difference merges both lean on that order instead of a hash set.

use std::cmp::Ordering;

use itertools::Itertools;

/// A vertex-to-vertex edge: `(out_vertex_or_sentinel, in_vertex)`.
pub type Edge = (i32, i32);

/// Inserts `(a, b)` at its sorted position. Precondition: `(a, b)` is not
/// already present.
pub fn append_ordered(a: i32, b: i32, edges: &mut Vec<Edge>) {
    let pos = edges.partition_point(|&e| e < (a, b));
    debug_assert!(edges.get(pos) != Some(&(a, b)), "({a}, {b}) already present");
    edges.insert(pos, (a, b));
}

/// Adds `(a, b)` mod 2: removes it if present, inserts it otherwise.
pub fn add_mod_two(a: i32, b: i32, edges: &mut Vec<Edge>) {
    let pos = edges.partition_point(|&e| e < (a, b));
    if edges.get(pos) == Some(&(a, b)) {
        edges.remove(pos);
    } else {
        edges.insert(pos, (a, b));
    }
}

/// XORs the complete bipartite product `parents x kids` into `edges`, in a
/// single ordered merge pass. `parents` and `kids` must each be sorted and
/// duplicate-free; the cross product is then sorted by construction.
pub fn add_mod_two_lists(parents: &[i32], kids: &[i32], edges: &mut Vec<Edge>) {
    if parents.is_empty() || kids.is_empty() {
        return;
    }

    let cross: Vec<Edge> = parents
        .iter()
        .copied()
        .cartesian_product(kids.iter().copied())
        .collect();

    let mut merged = Vec::with_capacity(edges.len() + cross.len());
    let mut i = 0;
    let mut j = 0;
    while i < edges.len() && j < cross.len() {
        match edges[i].cmp(&cross[j]) {
            Ordering::Less => {
                merged.push(edges[i]);
                i += 1;
            }
            Ordering::Greater => {
                merged.push(cross[j]);
                j += 1;
            }
            Ordering::Equal => {
                // present in both: mod-2 cancellation.
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&edges[i..]);
    merged.extend_from_slice(&cross[j..]);
    *edges = merged;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_ordered_keeps_sort_order() {
        let mut e = Vec::new();
        append_ordered(3, 1, &mut e);
        append_ordered(1, 5, &mut e);
        append_ordered(2, 2, &mut e);
        assert_eq!(e, vec![(1, 5), (2, 2), (3, 1)]);
    }

    #[test]
    fn add_mod_two_is_its_own_inverse() {
        let mut e = vec![(1, 2), (3, 4)];
        let before = e.clone();
        add_mod_two(1, 9, &mut e);
        add_mod_two(1, 9, &mut e);
        assert_eq!(e, before);
    }

    #[test]
    fn add_mod_two_lists_is_symmetric_difference() {
        let mut e = vec![(1, 1), (1, 2), (2, 1)];
        add_mod_two_lists(&[1, 2], &[1, 2], &mut e);
        // cross product {(1,1),(1,2),(2,1),(2,2)}; (1,1),(1,2),(2,1) cancel,
        // (2,2) is new.
        assert_eq!(e, vec![(2, 2)]);
    }

    #[test]
    fn add_mod_two_lists_empty_inputs_are_no_ops() {
        let mut e = vec![(1, 1)];
        add_mod_two_lists(&[], &[1], &mut e);
        add_mod_two_lists(&[1], &[], &mut e);
        assert_eq!(e, vec![(1, 1)]);
    }
}
