//! Mod-2 Gaussian elimination over the edge list.
//!
//! A malformed invocation (the head of `edges` not starting at `init`) is a
//! programming error in the caller, not a recoverable condition, so it
//! aborts with a `panic!` rather than silently looping forever.

use crate::edges::{add_mod_two_lists, Edge};

/// Gaussian-eliminates the edge `(a, b)`: removes every edge touching `a`
/// or `b`, then XORs in the complete bipartite product of `a`'s other kids
/// and `b`'s other parents.
///
/// Precondition: `(a, b)` is present in `edges`.
pub fn contract(a: i32, b: i32, edges: &mut Vec<Edge>) {
    debug_assert!(
        edges.binary_search(&(a, b)).is_ok(),
        "contract({a}, {b}): edge not present"
    );

    let mut parents = Vec::new();
    let mut kids = Vec::new();
    edges.retain(|&(start, end)| {
        if start == a && end == b {
            false
        } else if end == b {
            parents.push(start);
            false
        } else if start == a {
            kids.push(end);
            false
        } else {
            true
        }
    });

    add_mod_two_lists(&parents, &kids, edges);
}

/// Bounded Gaussian elimination: repeatedly contracts the first edge that
/// does not start at `init` and does not end above `final_`, until none
/// remain. Edges from the sentinel and edges into not-yet-settled vertices
/// are left for later layers to resolve.
pub fn special_homology(init: i32, final_: i32, edges: &mut Vec<Edge>) {
    if let Some(&(start, _)) = edges.first() {
        if start != init {
            panic!(
                "special_homology({init}, {final_}): edge list head starts at {start}, not the sentinel"
            );
        }
    }

    while let Some(pos) = edges
        .iter()
        .position(|&(start, end)| start != init && end <= final_)
    {
        let (a, b) = edges[pos];
        contract(a, b, edges);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_removes_the_edge_and_its_neighbors() {
        let mut e = vec![(0, 1), (0, 2), (1, 3), (1, 4)];
        contract(1, 3, &mut e);
        // (1,3) removed; kids of 1 (other than 3): {4}; parents of 3: {} (none
        // other than 1 pointed at 3); cross product is empty.
        assert_eq!(e, vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn contract_crosses_parents_and_kids() {
        let mut e = vec![(0, 1), (2, 1), (0, 2), (0, 3)];
        // contracting (0,1): parents of 1 other than 0 -> {2}; kids of 0 other
        // than 1 -> {2, 3}; cross product {(2,2),(2,3)} is XORed in.
        contract(0, 1, &mut e);
        assert_eq!(e, vec![(2, 2), (2, 3)]);
    }

    #[test]
    fn insert_then_contract_is_a_no_op() {
        let mut e = vec![(0, 2), (0, 5)];
        let before = e.clone();
        crate::edges::append_ordered(1, 3, &mut e);
        contract(1, 3, &mut e);
        assert_eq!(e, before);
    }

    #[test]
    fn special_homology_eliminates_the_sentinel() {
        // (2,1) is the only qualifying edge (start != 0, end <= 1); contracting
        // it takes (0,1) along as its only other parent, and 2 has no other
        // kids to pair back in, so the whole list empties out.
        let mut e = vec![(0, 1), (2, 1)];
        special_homology(0, 1, &mut e);
        assert!(e.is_empty());
    }

    #[test]
    fn special_homology_defers_edges_above_final() {
        // (1,2) ends above `final_` (1), so it is left for a later layer.
        let mut e = vec![(0, 1), (1, 2)];
        special_homology(0, 1, &mut e);
        assert_eq!(e, vec![(0, 1), (1, 2)]);
    }

    #[test]
    #[should_panic]
    fn special_homology_panics_on_malformed_head() {
        let mut e = vec![(1, 1)];
        special_homology(0, 5, &mut e);
    }
}
