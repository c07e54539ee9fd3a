//! Cell coordinates and position sets.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

/// A cell coordinate on the 9x9 board.
///
/// `x` is the column and `y` the row, both 0-indexed from the top-left
/// corner. Positions order row-major: `(0, 0)`, `(1, 0)`, ..., `(8, 8)`.
///
/// # Examples
///
/// ```
/// use arcgrid_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 2 * 9 + 4);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range: ({x}, {y})");
        Self { x, y }
    }

    /// Creates a position from a row-major board index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        assert!(index < 81, "board index out of range: {index}");
        Self {
            x: index % 9,
            y: index / 9,
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major board index (`y * 9 + x`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3x3 box containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns `true` if the two positions share a row, column, or box.
    ///
    /// A position is not considered to see itself.
    #[must_use]
    pub fn sees(self, other: Self) -> bool {
        self != other
            && (self.y == other.y || self.x == other.x || self.box_index() == other.box_index())
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

/// A set of board positions, backed by an 81-bit mask.
///
/// Iteration yields positions in row-major order.
///
/// # Examples
///
/// ```
/// use arcgrid_core::{Position, PositionSet};
///
/// let mut set = PositionSet::new();
/// set.insert(Position::new(0, 0));
/// set.insert(Position::new(8, 8));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Position::new(0, 0)));
/// assert!(!set.contains(Position::new(4, 4)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionSet(u128);

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a position into the set.
    pub fn insert(&mut self, pos: Position) {
        self.0 |= 1 << pos.index();
    }

    /// Removes a position from the set.
    pub fn remove(&mut self, pos: Position) {
        self.0 &= !(1 << pos.index());
    }

    /// Returns `true` if the set contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    pub fn iter(self) -> PositionSetIter {
        PositionSetIter(self.0)
    }
}

impl Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for PositionSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PositionSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for PositionSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = PositionSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`].
#[derive(Debug, Clone)]
pub struct PositionSetIter(u128);

impl Iterator for PositionSetIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for PositionSetIter {}
impl ExactSizeIterator for PositionSetIter {}
