//! The 9x9 board.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Position, ValueSet};

/// A 9x9 Sudoku board.
///
/// Each cell holds an `i8`: `0` marks an empty cell and `1`-`9` a placed
/// value. The all `-1` grid ([`Grid::UNSOLVABLE`]) is the sentinel the solver
/// returns when a puzzle has no solution; it never occurs as an input to
/// solving itself.
///
/// The grid is `Copy`, so non-destructive probes are plain copies
/// ([`Grid::with_value`]) while committed assignments mutate in place
/// ([`Grid::set`]).
///
/// # Examples
///
/// ```
/// use arcgrid_core::{Grid, Position};
///
/// let mut grid = Grid::new();
/// grid.set(Position::new(0, 0), 5);
///
/// assert_eq!(grid.get(Position::new(0, 0)), 5);
/// assert!(!grid.accepts(Position::new(8, 0), 5)); // same row
/// assert!(grid.accepts(Position::new(8, 8), 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[i8; 9]; 9],
}

impl Grid {
    /// The sentinel grid of all `-1`, signaling "no solution".
    pub const UNSOLVABLE: Self = Self {
        cells: [[-1; 9]; 9],
    };

    /// Creates an empty grid (all cells `0`).
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Returns the value at `pos` (`0` for empty).
    #[must_use]
    pub const fn get(&self, pos: Position) -> i8 {
        self.cells[pos.y() as usize][pos.x() as usize]
    }

    /// Places `value` at `pos` in place.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(
            (1..=9).contains(&value),
            "value must be between 1 and 9, got {value}"
        );
        self.cells[pos.y() as usize][pos.x() as usize] = value as i8;
    }

    /// Resets the cell at `pos` to empty.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.y() as usize][pos.x() as usize] = 0;
    }

    /// Returns a copy of the grid with `value` placed at `pos`.
    ///
    /// This is the non-destructive probe used during propagation: the board
    /// under test is never touched.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn with_value(&self, pos: Position, value: u8) -> Self {
        let mut copy = *self;
        copy.set(pos, value);
        copy
    }

    /// Returns the values 1-9 present in the row, column, and box of `pos`,
    /// including the cell itself.
    fn seen_values(&self, pos: Position) -> ValueSet {
        let mut seen = ValueSet::new();
        for i in 0..9 {
            add_value(&mut seen, self.cells[pos.y() as usize][i]);
            add_value(&mut seen, self.cells[i][pos.x() as usize]);
        }
        let y0 = usize::from(pos.y() / 3) * 3;
        let x0 = usize::from(pos.x() / 3) * 3;
        for y in y0..y0 + 3 {
            for x in x0..x0 + 3 {
                add_value(&mut seen, self.cells[y][x]);
            }
        }
        seen
    }

    /// Returns `true` if placing `value` at `pos` would not duplicate a
    /// value already present in its row, column, or box.
    ///
    /// The cell's own content participates in the scan like any other cell;
    /// callers test empty cells, so this only matters for probes.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn accepts(&self, pos: Position, value: u8) -> bool {
        !self.seen_values(pos).contains(value)
    }

    /// Returns `true` if any row, column, or box contains a duplicated
    /// nonzero value.
    #[must_use]
    pub fn is_illegal(&self) -> bool {
        for i in 0..9 {
            let row = self.cells[i];
            let column = std::array::from_fn(|y| self.cells[y][i]);
            if has_duplicate(row) || has_duplicate(column) {
                return true;
            }
        }
        for y0 in [0, 3, 6] {
            for x0 in [0, 3, 6] {
                let square = std::array::from_fn(|i| self.cells[y0 + i / 3][x0 + i % 3]);
                if has_duplicate(square) {
                    return true;
                }
            }
        }
        false
    }

    /// Returns the empty cell positions in row-major order.
    ///
    /// These are the solver's variables.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.get(pos) == 0).collect()
    }

    /// Returns `true` if every cell holds a value 1-9.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::all().all(|pos| (1..=9).contains(&self.get(pos)))
    }

    /// Returns `true` if every row, column, and box holds exactly the values
    /// 1-9.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        self.is_complete() && !self.is_illegal()
    }

    /// Returns `true` if this is the "no solution" sentinel.
    #[must_use]
    pub fn is_unsolvable(&self) -> bool {
        *self == Self::UNSOLVABLE
    }

    /// Returns the raw cell matrix, indexed `[row][column]`.
    #[must_use]
    pub const fn cells(&self) -> [[i8; 9]; 9] {
        self.cells
    }
}

fn add_value(seen: &mut ValueSet, cell: i8) {
    if let Ok(value) = u8::try_from(cell) {
        if (1..=9).contains(&value) {
            seen.insert(value);
        }
    }
}

fn has_duplicate(cells: [i8; 9]) -> bool {
    for (i, &a) in cells.iter().enumerate() {
        if a == 0 {
            continue;
        }
        if cells[..i].contains(&a) {
            return true;
        }
    }
    false
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[[i8; 9]; 9]> for Grid {
    fn from(cells: [[i8; 9]; 9]) -> Self {
        Self { cells }
    }
}

/// Error returned when parsing a [`Grid`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character other than a digit, `.`, `_`, or whitespace was found.
    #[display("unexpected character {character:?} in grid")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// The number of cells found.
        found: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from a string of 81 cells.
    ///
    /// Digits `1`-`9` are placed values; `.`, `_`, and `0` mark empty cells.
    /// All whitespace is ignored, so both single-line and row-per-line
    /// layouts parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let value = match character {
                '.' | '_' | '0' => 0,
                '1'..='9' => character as i8 - '0' as i8,
                _ => return Err(ParseGridError::UnexpectedCharacter { character }),
            };
            if count < 81 {
                grid.cells[count / 9][count % 9] = value;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { found: count });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    /// Formats the grid as nine rows of nine cells, with a space between
    /// column triplets. Empty cells print as `_`; sentinel cells as `!`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, &cell) in row.iter().enumerate() {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                let c = match cell {
                    0 => '_',
                    1..=9 => (b'0' + cell as u8) as char,
                    _ => '!',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
