//! End-to-end tests for the solver facade.

use arcgrid_core::{Grid, Position};
use arcgrid_solver::{DomainMap, propagate, solve};
use proptest::prelude::*;

const CLASSIC_PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const CLASSIC_SOLUTION: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

// One of Gordon Royle's minimal 17-clue puzzles.
const SEVENTEEN_CLUES: &str =
    "000000010400000000020000000000050407008000300001090000300400200050100000000806000";

fn parse(s: &str) -> Grid {
    s.parse().unwrap()
}

#[test]
fn solves_classic_puzzle_to_reference_solution() {
    let solution = solve(parse(CLASSIC_PUZZLE));
    assert_eq!(solution, parse(CLASSIC_SOLUTION));
}

#[test]
fn solved_output_is_a_valid_solution() {
    let solution = solve(parse(CLASSIC_PUZZLE));
    assert!(solution.is_complete());
    assert!(solution.is_valid_solution());
}

#[test]
fn solve_is_idempotent() {
    let once = solve(parse(CLASSIC_PUZZLE));
    let twice = solve(once);
    assert_eq!(once, twice);
}

#[test]
fn illegal_input_yields_sentinel() {
    // Two 5s in the same row.
    let mut grid = parse(CLASSIC_PUZZLE);
    grid.set(Position::new(8, 0), 5);
    assert_eq!(solve(grid), Grid::UNSOLVABLE);
}

#[test]
fn complete_valid_grid_is_returned_unchanged() {
    let solved = parse(CLASSIC_SOLUTION);
    assert_eq!(solve(solved), solved);
}

#[test]
fn single_empty_cell_is_solved_by_propagation_alone() {
    let mut grid = parse(CLASSIC_SOLUTION);
    grid.clear(Position::new(4, 4));

    // The lone variable's domain is already a singleton after propagation,
    // so no search branch is ever needed.
    let variables = grid.empty_positions();
    let mut domains = DomainMap::build(&grid, &variables);
    assert!(propagate::enforce(&grid, &variables, &mut domains));
    assert!(domains.all_singletons());

    assert_eq!(solve(grid), parse(CLASSIC_SOLUTION));
}

#[test]
fn seventeen_clue_puzzle_solves_to_valid_completion() {
    let puzzle = parse(SEVENTEEN_CLUES);
    let solution = solve(puzzle);

    assert!(solution.is_valid_solution());
    for pos in Position::all() {
        let clue = puzzle.get(pos);
        if clue != 0 {
            assert_eq!(solution.get(pos), clue, "clue overwritten at {pos:?}");
        }
    }
}

#[test]
fn well_formed_unsolvable_puzzle_yields_sentinel() {
    // Three open cells in row 0 are jointly restricted to the two values
    // {8, 9}: every single placement is legal, but no completion exists.
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
    assert!(!grid.is_illegal());
    assert_eq!(solve(grid), Grid::UNSOLVABLE);
}

#[test]
fn propagation_contradiction_yields_sentinel() {
    // (7, 0) and (8, 0) are each pinned to {9} by their columns; AC-3
    // empties one of the domains.
    let grid = parse(
        "
        1234567__
        _________
        _________
        _________
        _______8_
        _________
        ________8
        _________
        _________
        ",
    );
    assert!(!grid.is_illegal());
    assert_eq!(solve(grid), Grid::UNSOLVABLE);
}

#[test]
fn empty_domain_before_propagation_yields_sentinel() {
    // (8, 0) sees 1-8 in its row and a 9 in its column: no legal value
    // remains even before AC-3 runs.
    let grid = parse(
        "
        12345678_
        _________
        _________
        _________
        ________9
        _________
        _________
        _________
        _________
        ",
    );
    assert!(!grid.is_illegal());
    assert_eq!(solve(grid), Grid::UNSOLVABLE);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Masking cells of a valid solution always leaves a solvable puzzle,
    /// and the solver's answer must be a valid completion of the clues.
    #[test]
    fn prop_masked_solution_solves_to_valid_completion(
        masked in prop::collection::btree_set(0u8..81, 0..40)
    ) {
        let mut puzzle = parse(CLASSIC_SOLUTION);
        for &index in &masked {
            puzzle.clear(Position::from_index(index));
        }

        let solution = solve(puzzle);
        prop_assert!(solution.is_valid_solution());
        for pos in Position::all() {
            let clue = puzzle.get(pos);
            if clue != 0 {
                prop_assert_eq!(solution.get(pos), clue);
            }
        }
    }
}
