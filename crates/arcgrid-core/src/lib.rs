//! Board primitives for the arcgrid Sudoku solver.
//!
//! This crate defines the data types shared by the solver and any harness
//! built on top of it:
//!
//! - [`Position`] - a cell coordinate on the 9x9 board
//! - [`PositionSet`] - a bitset over all 81 board positions
//! - [`ValueSet`] - a bitset over the cell values 1-9
//! - [`Grid`] - the 9x9 board itself, with legality and constraint checks
//!
//! Cells hold `i8` values: `0` marks an empty cell, `1`-`9` a placed value,
//! and a grid of all `-1` ([`Grid::UNSOLVABLE`]) is the in-band sentinel the
//! solver returns for puzzles with no solution.
//!
//! # Examples
//!
//! ```
//! use arcgrid_core::{Grid, Position};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert!(!grid.is_illegal());
//! assert_eq!(grid.get(Position::new(0, 0)), 5);
//! assert!(grid.accepts(Position::new(2, 0), 4));
//! # Ok::<(), arcgrid_core::ParseGridError>(())
//! ```

pub use self::{
    grid::{Grid, ParseGridError},
    position::{Position, PositionSet, PositionSetIter},
    value_set::{ValueSet, ValueSetIter},
};

mod grid;
mod position;
mod value_set;
