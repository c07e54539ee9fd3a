//! Per-variable candidate domains.

use arcgrid_core::{Grid, Position, ValueSet};

/// Candidate domains for the variables of one solve.
///
/// The map is a fixed 81-slot array indexed by [`Position::index`]; slots for
/// non-variable cells stay `None`. Domains are built once from the unary
/// constraints and only ever shrink afterwards, during propagation and
/// search. An emptied domain proves the (sub)problem unsolvable.
///
/// # Examples
///
/// ```
/// use arcgrid_core::{Grid, Position};
/// use arcgrid_solver::DomainMap;
///
/// let mut grid = Grid::new();
/// grid.set(Position::new(0, 0), 5);
///
/// let variables = grid.empty_positions();
/// let domains = DomainMap::build(&grid, &variables);
///
/// // 5 is excluded from every cell that sees (0, 0).
/// let row_peer = domains.candidates(Position::new(8, 0)).unwrap();
/// assert_eq!(row_peer.len(), 8);
/// assert!(!row_peer.contains(5));
/// ```
#[derive(Debug, Clone)]
pub struct DomainMap {
    slots: [Option<ValueSet>; 81],
}

impl DomainMap {
    /// Builds the domain of every variable from the unary constraints:
    /// {1..9} minus the values already placed in the variable's row, column,
    /// and box.
    #[must_use]
    pub fn build(grid: &Grid, variables: &[Position]) -> Self {
        let mut slots = [None; 81];
        for &pos in variables {
            let domain = (1..=9).filter(|&value| grid.accepts(pos, value)).collect();
            slots[pos.index()] = Some(domain);
        }
        Self { slots }
    }

    /// Returns the domain of `pos`, or `None` if `pos` is not a variable.
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> Option<ValueSet> {
        self.slots[pos.index()]
    }

    /// Removes `value` from the domain of `pos`.
    ///
    /// Does nothing if `pos` is not a variable. Removal is the only mutation
    /// domains support.
    pub fn remove(&mut self, pos: Position, value: u8) {
        if let Some(domain) = &mut self.slots[pos.index()] {
            domain.remove(value);
        }
    }

    /// Returns the variable with the smallest domain, or `None` when there
    /// are no variables left (the puzzle is fully assigned).
    ///
    /// Ties break toward the first variable in row-major order, keeping
    /// selection deterministic.
    #[must_use]
    pub fn most_constrained(&self) -> Option<Position> {
        let mut best: Option<(Position, usize)> = None;
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(domain) = slot {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::from_index(index as u8);
                if best.is_none_or(|(_, len)| domain.len() < len) {
                    best = Some((pos, domain.len()));
                }
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Returns `true` if any variable has an empty domain.
    #[must_use]
    pub fn has_empty_domain(&self) -> bool {
        self.iter().any(|(_, domain)| domain.is_empty())
    }

    /// Returns `true` if every variable's domain holds exactly one value.
    ///
    /// Vacuously true when there are no variables.
    #[must_use]
    pub fn all_singletons(&self) -> bool {
        self.iter().all(|(_, domain)| domain.len() == 1)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns `true` if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns an iterator over `(variable, domain)` pairs in row-major
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, ValueSet)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            #[expect(clippy::cast_possible_truncation)]
            let pos = Position::from_index(index as u8);
            slot.map(|domain| (pos, domain))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Grid {
        s.parse().unwrap()
    }

    fn build(grid: &Grid) -> DomainMap {
        DomainMap::build(grid, &grid.empty_positions())
    }

    #[test]
    fn test_build_excludes_seen_values() {
        let grid = parse(
            "
            123 ___ ___
            456 ___ ___
            78_ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            9__ ___ ___
            ",
        );
        let domains = build(&grid);

        // (2, 2) sees 1-8 in its box and 3, 6 in its column.
        let domain = domains.candidates(Position::new(2, 2)).unwrap();
        assert_eq!(domain, ValueSet::from_iter([9]));

        // (0, 3) sees 1, 4, 7 in its column and 9 below it.
        let domain = domains.candidates(Position::new(0, 3)).unwrap();
        assert_eq!(domain, ValueSet::from_iter([2, 3, 5, 6, 8]));

        // Filled cells are not variables.
        assert!(domains.candidates(Position::new(0, 0)).is_none());
    }

    #[test]
    fn test_empty_grid_has_full_domains() {
        let domains = build(&Grid::new());
        assert_eq!(domains.len(), 81);
        assert!(domains.iter().all(|(_, d)| d == ValueSet::FULL));
    }

    #[test]
    fn test_most_constrained_picks_smallest() {
        let mut grid = Grid::new();
        // Constrain (8, 0) down to a single candidate via its row.
        for x in 0..8 {
            grid.set(Position::new(x, 0), x + 1);
        }
        let domains = build(&grid);
        assert_eq!(domains.most_constrained(), Some(Position::new(8, 0)));
    }

    #[test]
    fn test_most_constrained_tie_breaks_row_major() {
        let domains = build(&Grid::new());
        // All domains are full, so the first variable wins.
        assert_eq!(domains.most_constrained(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_most_constrained_none_when_no_variables() {
        let solved = parse(
            "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
            ",
        );
        let domains = build(&solved);
        assert!(domains.is_empty());
        assert_eq!(domains.most_constrained(), None);
        assert!(domains.all_singletons()); // vacuously
    }

    #[test]
    fn test_remove_only_shrinks() {
        let mut domains = build(&Grid::new());
        let pos = Position::new(4, 4);

        domains.remove(pos, 3);
        domains.remove(pos, 3);
        let domain = domains.candidates(pos).unwrap();
        assert_eq!(domain.len(), 8);
        assert!(!domain.contains(3));

        // Removing from a non-variable slot is a no-op.
        let mut grid = Grid::new();
        grid.set(pos, 1);
        let mut domains = build(&grid);
        domains.remove(pos, 1);
        assert!(domains.candidates(pos).is_none());
    }

    #[test]
    fn test_has_empty_domain() {
        let mut grid = Grid::new();
        // Fill row 0 except (8, 0), then put a 9 elsewhere in column 8.
        for x in 0..8 {
            grid.set(Position::new(x, 0), x + 1);
        }
        grid.set(Position::new(8, 4), 9);

        let domains = build(&grid);
        assert!(domains.has_empty_domain());
        assert_eq!(
            domains.candidates(Position::new(8, 0)),
            Some(ValueSet::EMPTY)
        );
    }
}
