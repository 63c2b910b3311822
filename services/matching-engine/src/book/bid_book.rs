//! Bid (buy-side) order book
//!
//! Maintains resting buy quantity keyed by price. Uses BTreeMap for
//! ordered iteration; the best bid is the maximum key. Quantities at the
//! same price merge into a single scalar level, so the matching unit is
//! "price level", not individual resting order.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};

/// Bid (buy) side of the book
///
/// Every stored level holds strictly positive quantity; a level is
/// removed the instant its aggregated quantity reaches zero.
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    levels: BTreeMap<Price, Quantity>,
}

impl BidBook {
    /// Create a new empty bid book
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

    /// Get the best bid (highest price) with its aggregated quantity
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        // BTreeMap iterates ascending, so the best bid is the last entry
        self.levels
            .iter()
            .next_back()
            .map(|(price, qty)| (*price, *qty))
    }

    /// Get the best bid price
    pub fn best_bid_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Get mutable access to the best bid level
    pub(crate) fn best_level_mut(&mut self) -> Option<(Price, &mut Quantity)> {
        self.levels
            .iter_mut()
            .next_back()
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
            .rev()
            .take(depth)
            .map(|(price, qty)| (*price, *qty))
            .collect()
    }

    /// Total resting quantity across all levels
    pub fn total_quantity(&self) -> Quantity {
        self.levels.values().copied().sum()
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
