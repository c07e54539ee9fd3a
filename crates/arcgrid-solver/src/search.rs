//! Depth-first backtracking search.

use arcgrid_core::Grid;

use crate::DomainMap;

/// Searches for a complete assignment, mutating `grid` in place.
///
/// The branch variable is always the one with the fewest remaining
/// candidates ([`DomainMap::most_constrained`]); candidate values are tried
/// in ascending order. A trial value is assigned directly on the grid and
/// removed again before returning whenever the branch below it fails, so a
/// `false` return always leaves the grid exactly as it was. On success the
/// assignments stay in place and the grid is the solution.
///
/// `seed` carries domains already narrowed by propagation into the top-level
/// call. Recursive calls pass `None` and rebuild domains from the live grid,
/// which is equivalent because assignments are visible on the board.
///
/// # Examples
///
/// ```
/// use arcgrid_core::Grid;
/// use arcgrid_solver::search::backtrack;
///
/// let mut grid: Grid = "
///     _________
///     _________
///     _________
///     _________
///     _________
///     _________
///     _________
///     _________
///     _________
/// "
/// .parse()?;
///
/// assert!(backtrack(&mut grid, None));
/// assert!(grid.is_valid_solution());
/// # Ok::<(), arcgrid_core::ParseGridError>(())
/// ```
pub fn backtrack(grid: &mut Grid, seed: Option<DomainMap>) -> bool {
    let domains = match seed {
        Some(domains) => domains,
        None => DomainMap::build(grid, &grid.empty_positions()),
    };

    let Some(var) = domains.most_constrained() else {
        // No unassigned variables left: the grid is complete.
        return true;
    };

    let candidates = domains.candidates(var).unwrap_or_default();
    for value in candidates {
        grid.set(var, value);
        if backtrack(grid, None) {
            return true;
        }
        grid.clear(var);
    }
    false
}

#[cfg(test)]
mod tests {
    use arcgrid_core::Position;

    use super::*;

    fn parse(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_solves_classic_puzzle() {
        let mut grid = parse(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
            ",
        );
        assert!(backtrack(&mut grid, None));
        assert!(grid.is_valid_solution());
        assert_eq!(grid.get(Position::new(0, 0)), 5); // clues untouched
    }

    #[test]
    fn test_succeeds_on_complete_grid() {
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
        let mut grid = solved;
        assert!(backtrack(&mut grid, None));
        assert_eq!(grid, solved);
    }

    #[test]
    fn test_failure_restores_grid() {
        // Three open cells in row 0 share the two candidates {8, 9}:
        // locally consistent but globally impossible.
        let grid = parse(
            "
            123456___
            ______7__
            _________
            _________
            _________
            _________
            _________
            _________
            _________
            ",
        );
        let mut working = grid;
        assert!(!backtrack(&mut working, None));
        assert_eq!(working, grid);
    }

    #[test]
    fn test_accepts_seeded_domains() {
        let mut grid = parse(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
            ",
        );
        let domains = DomainMap::build(&grid, &grid.empty_positions());
        assert!(backtrack(&mut grid, Some(domains)));
        assert!(grid.is_valid_solution());
    }
}
