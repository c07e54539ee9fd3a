//! The static neighbor graph over the variables of one solve.

use arcgrid_core::{Position, PositionSet};

/// Maps each variable to the set of variables sharing a row, column, or box
/// with it.
///
/// The relation is symmetric and irreflexive. The graph is a pure function
/// of the variable set, computed once per propagation run and immutable
/// afterwards; cells that fill up later do not drop out of it.
///
/// # Examples
///
/// ```
/// use arcgrid_core::Position;
/// use arcgrid_solver::NeighborGraph;
///
/// let variables = [Position::new(0, 0), Position::new(5, 0), Position::new(4, 4)];
/// let graph = NeighborGraph::build(&variables);
///
/// assert!(graph.neighbors(Position::new(0, 0)).contains(Position::new(5, 0)));
/// assert!(graph.neighbors(Position::new(4, 4)).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct NeighborGraph {
    sets: [PositionSet; 81],
}

impl NeighborGraph {
    /// Builds the graph from a variable set with an O(n²) pair scan.
    #[must_use]
    pub fn build(variables: &[Position]) -> Self {
        let mut sets = [PositionSet::EMPTY; 81];
        for (i, &a) in variables.iter().enumerate() {
            for &b in &variables[i + 1..] {
                if a.sees(b) {
                    sets[a.index()].insert(b);
                    sets[b.index()].insert(a);
                }
            }
        }
        Self { sets }
    }

    /// Returns the neighbors of `pos`.
    ///
    /// Empty for positions that were not in the variable set.
    #[must_use]
    pub const fn neighbors(&self, pos: Position) -> PositionSet {
        self.sets[pos.index()]
    }
}
