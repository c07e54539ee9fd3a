//! A set of cell values from 1 to 9.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

/// A set of cell values in the range 1-9, backed by a 9-bit mask.
///
/// This is the representation used for variable domains: bit `v - 1` is set
/// when value `v` is a member. Iteration yields values in ascending order,
/// which keeps domain enumeration deterministic.
///
/// # Examples
///
/// ```
/// use arcgrid_core::ValueSet;
///
/// let mut candidates = ValueSet::FULL;
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
/// ```
///
/// # Set operations
///
/// ```
/// use arcgrid_core::ValueSet;
///
/// let a = ValueSet::from_iter([1, 2, 3]);
/// let b = ValueSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a | b, ValueSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a & b, ValueSet::from_iter([2, 3]));
/// assert_eq!(a.difference(b), ValueSet::from_iter([1]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ValueSet(u16);

const FULL_MASK: u16 = 0x1ff;

impl ValueSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all values 1-9.
    pub const FULL: Self = Self(FULL_MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    fn bit(value: u8) -> u16 {
        assert!(
            (1..=9).contains(&value),
            "value must be between 1 and 9, got {value}"
        );
        1 << (value - 1)
    }

    /// Inserts a value into the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn insert(&mut self, value: u8) {
        self.0 |= Self::bit(value);
    }

    /// Removes a value from the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn remove(&mut self, value: u8) {
        self.0 &= !Self::bit(value);
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        self.0 & Self::bit(value) != 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if the set has exactly one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgrid_core::ValueSet;
    ///
    /// assert_eq!(ValueSet::from_iter([7]).as_single(), Some(7));
    /// assert_eq!(ValueSet::from_iter([3, 7]).as_single(), None);
    /// assert_eq!(ValueSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<u8> {
        if self.len() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Some(value)
        } else {
            None
        }
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub fn iter(self) -> ValueSetIter {
        ValueSetIter(self.0)
    }
}

impl Debug for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for ValueSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ValueSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ValueSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for ValueSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<u8> for ValueSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for ValueSet {
    type Item = u8;
    type IntoIter = ValueSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`ValueSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct ValueSetIter(u16);

impl Iterator for ValueSetIter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for ValueSetIter {}
impl ExactSizeIterator for ValueSetIter {}
