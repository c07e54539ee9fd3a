//! The arcgrid CSP solving engine.
//!
//! A puzzle is modeled as a constraint satisfaction problem: one variable per
//! empty cell, domains over the values 1-9, and all-different constraints
//! along rows, columns, and boxes. Solving runs in two phases:
//!
//! 1. [`propagate::enforce`] makes every arc between neighboring variables
//!    consistent (AC-3), shrinking domains monotonically;
//! 2. [`search::backtrack`] finishes with depth-first search, always
//!    branching on the variable with the fewest remaining candidates.
//!
//! The [`solve`] facade wires the phases together and maps every failure
//! (illegal input, emptied domain, exhausted search) to
//! [`Grid::UNSOLVABLE`](arcgrid_core::Grid::UNSOLVABLE).
//!
//! # Examples
//!
//! ```
//! use arcgrid_core::Grid;
//! use arcgrid_solver::solve;
//!
//! let puzzle: Grid = "
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
//! let solution = solve(puzzle);
//! assert!(solution.is_valid_solution());
//! # Ok::<(), arcgrid_core::ParseGridError>(())
//! ```

pub use self::{
    agenda::{Agenda, Arc},
    domain::DomainMap,
    neighbors::NeighborGraph,
    solve::solve,
};

mod agenda;
mod domain;
mod neighbors;
pub mod propagate;
pub mod search;
mod solve;
