//! AC-3 arc-consistency propagation.
//!
//! An arc `(i, j)` is consistent when every value in the domain of `i` is
//! compatible with at least one value in the domain of `j`. [`enforce`]
//! drives the whole variable set to that fixed point, or proves the puzzle
//! unsolvable along the way.

use arcgrid_core::{Grid, Position};

use crate::{Agenda, DomainMap, NeighborGraph};

/// Revises the domain of `i` against the domain of `j`.
///
/// Each candidate `v` of `i` is placed on a throwaway copy of the grid; if no
/// candidate of `j` remains legal against that copy, `v` has no support and
/// is removed. Support is checked against `j`'s domain values, never against
/// `j`'s board cell: both variables are treated as still unassigned.
///
/// Returns `true` if the domain of `i` shrank. Arcs between variables that
/// share no house never shrink anything.
pub fn revise(grid: &Grid, domains: &mut DomainMap, i: Position, j: Position) -> bool {
    let (Some(di), Some(dj)) = (domains.candidates(i), domains.candidates(j)) else {
        return false;
    };

    let mut revised = false;
    for v in di {
        let probe = grid.with_value(i, v);
        if !dj.iter().any(|w| probe.accepts(j, w)) {
            domains.remove(i, v);
            revised = true;
        }
    }
    revised
}

/// Enforces arc consistency over all variables (AC-3).
///
/// Builds the neighbor graph, seeds the agenda with every directed arc
/// `(i, j)` for each variable `i` and neighbor `j`, and drains it. When a
/// revision shrinks the domain of `i`, the change is propagated outward by
/// re-enqueueing `(k, i)` for every other variable `k` except the `j` just
/// processed.
///
/// Returns `false` the moment any domain empties: that is a proof of
/// unsolvability, not a condition to retry. Returns `true` when the agenda
/// drains, leaving `domains` at the arc-consistent fixed point.
pub fn enforce(grid: &Grid, variables: &[Position], domains: &mut DomainMap) -> bool {
    let graph = NeighborGraph::build(variables);

    let mut agenda = Agenda::new();
    for &i in variables {
        for j in graph.neighbors(i) {
            agenda.enqueue((i, j));
        }
    }

    while let Some((i, j)) = agenda.dequeue() {
        if revise(grid, domains, i, j) {
            if domains.candidates(i).is_some_and(|d| d.is_empty()) {
                return false;
            }
            for &k in variables {
                if k != i && k != j {
                    agenda.enqueue((k, i));
                }
            }
        }
    }
    true
}
