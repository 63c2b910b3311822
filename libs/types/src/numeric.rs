//! Integer tick types for prices and quantities
//!
//! The pipeline trades in whole ticks: prices are discrete integer price
//! units and quantities are whole lots. Using newtypes over `i64` keeps the
//! two dimensions from being mixed up while staying cheap to copy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A discrete price in integer ticks
///
/// No fractional ticks exist in this model. Ordering is the natural
/// integer ordering, so `BTreeMap<Price, _>` iterates from the lowest
/// price to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from a raw tick count
    pub const fn new(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Raw tick count
    pub const fn ticks(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resting or remaining quantity in whole lots
///
/// Quantities are never negative. Subtraction below zero is a matching
/// logic defect and is debug-asserted rather than silently tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// The zero quantity
    pub const ZERO: Quantity = Quantity(0);

    /// Create a quantity from a raw lot count
    pub fn new(lots: i64) -> Self {
        debug_assert!(lots >= 0, "quantity must be non-negative, got {lots}");
        Self(lots)
    }

    /// Raw lot count
    pub const fn lots(self) -> i64 {
        self.0
    }

    /// True if this quantity is exactly zero
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The smaller of two quantities
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Subtract, returning `None` if the result would go negative
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        if self.0 >= rhs.0 {
            Some(Self(self.0 - rhs.0))
        } else {
            None
        }
    }

    /// Subtract, clamping at zero instead of going negative
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self((self.0 - rhs.0).max(0))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Self) -> Self::Output {
        Quantity(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert!(self.0 >= rhs.0, "quantity underflow: {} - {}", self.0, rhs.0);
        Quantity(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        debug_assert!(self.0 >= rhs.0, "quantity underflow: {} - {}", self.0, rhs.0);
        self.0 -= rhs.0;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::ZERO, Add::add)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
