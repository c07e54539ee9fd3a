//! The solver facade.

use arcgrid_core::Grid;

use crate::{DomainMap, propagate, search};

/// Solves a Sudoku puzzle exactly.
///
/// Empty cells are `0`. Returns the completed grid, or
/// [`Grid::UNSOLVABLE`] (all `-1`) when no solution exists. The sentinel
/// covers every failure cause without distinguishing them: an input that
/// already violates uniqueness, a variable with no legal candidate,
/// propagation emptying a domain, or the search exhausting all branches.
///
/// The pipeline: legality pre-check, domain construction from unary
/// constraints, AC-3 propagation, then either a direct commit (when every
/// domain collapsed to a single value) or backtracking search seeded with
/// the propagated domains.
///
/// # Examples
///
/// ```
/// use arcgrid_core::Grid;
/// use arcgrid_solver::solve;
///
/// let puzzle: Grid = "
///     __3 _2_ 6__
///     9__ 3_5 __1
///     __1 8_6 4__
///     __8 1_2 9__
///     7__ ___ __8
///     __6 7_8 2__
///     __2 6_9 5__
///     8__ 2_3 __9
///     __5 _1_ 3__
/// "
/// .parse()?;
///
/// let solution = solve(puzzle);
/// assert!(solution.is_valid_solution());
/// # Ok::<(), arcgrid_core::ParseGridError>(())
/// ```
#[must_use]
pub fn solve(mut grid: Grid) -> Grid {
    if grid.is_illegal() {
        return Grid::UNSOLVABLE;
    }

    let variables = grid.empty_positions();
    let mut domains = DomainMap::build(&grid, &variables);

    // A variable with no legal value at all: nothing to search.
    if domains.has_empty_domain() {
        return Grid::UNSOLVABLE;
    }

    if !propagate::enforce(&grid, &variables, &mut domains) {
        return Grid::UNSOLVABLE;
    }

    if domains.all_singletons() {
        // Propagation alone solved the puzzle; commit the assignments.
        for (pos, domain) in domains.iter() {
            if let Some(value) = domain.as_single() {
                grid.set(pos, value);
            }
        }
        return grid;
    }

    if search::backtrack(&mut grid, Some(domains)) {
        grid
    } else {
        Grid::UNSOLVABLE
    }
}
