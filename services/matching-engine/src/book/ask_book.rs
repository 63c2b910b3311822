//! Ask (sell-side) order book
//!
//! Maintains resting sell quantity keyed by price. Uses BTreeMap for
//! ordered iteration; the best ask is the minimum key.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};

/// Ask (sell) side of the book
///
/// Every stored level holds strictly positive quantity; a level is
/// removed the instant its aggregated quantity reaches zero.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    levels: BTreeMap<Price, Quantity>,
}

impl AskBook {
    /// Create a new empty ask book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Aggregate resting quantity into the level at `price`
    pub fn insert(&mut self, price: Price, quantity: Quantity) {
        debug_assert!(!quantity.is_zero(), "cannot rest zero quantity");
        *self.levels.entry(price).or_insert(Quantity::ZERO) += quantity;
    }

    /// Get the best ask (lowest price) with its aggregated quantity
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.levels.iter().next().map(|(price, qty)| (*price, *qty))
    }

    /// Get the best ask price
    pub fn best_ask_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Get mutable access to the best ask level
    pub(crate) fn best_level_mut(&mut self) -> Option<(Price, &mut Quantity)> {
        self.levels
            .iter_mut()
            .next()
            .map(|(price, qty)| (*price, qty))
    }

    /// Remove the level at `price` entirely
    pub(crate) fn remove_level(&mut self, price: Price) {
        self.levels.remove(&price);
    }

    /// Get depth snapshot (top N price levels, best first)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .take(depth)
            .map(|(price, qty)| (*price, *qty))
            .collect()
    }

    /// Total resting quantity across all levels
    pub fn total_quantity(&self) -> Quantity {
        self.levels.values().copied().sum()
    }

    /// Check if the ask book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
