//! Order record with latency checkpoints
//!
//! An order is an immutable intent record plus a mutable remaining
//! quantity and three write-once timing checkpoints used to measure
//! end-to-end latency through the pipeline.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// A limit order flowing through the pipeline
///
/// `quantity` is the remaining unfilled amount: it starts positive,
/// decreases as the order matches, and never goes negative. The three
/// checkpoints are stamped in strictly non-decreasing order:
/// produced at creation, consumed at dequeue, processed after matching.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    /// Remaining unfilled quantity
    pub quantity: Quantity,
    /// Checkpoint 1: stamped by the producer at creation
    pub produced_at: Instant,
    /// Checkpoint 2: stamped by the consumer at dequeue
    pub consumed_at: Option<Instant>,
    /// Checkpoint 3: stamped by the consumer after matching completes
    pub processed_at: Option<Instant>,
}

impl Order {
    /// Create a new order, stamping the produced checkpoint
    pub fn new(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        debug_assert!(!quantity.is_zero(), "orders must carry positive quantity");
        Self {
            id,
            side,
            price,
            quantity,
            produced_at: Instant::now(),
            consumed_at: None,
            processed_at: None,
        }
    }

    /// Stamp the consumed checkpoint (write-once)
    pub fn mark_consumed(&mut self) {
        debug_assert!(self.consumed_at.is_none(), "consumed checkpoint is write-once");
        self.consumed_at = Some(Instant::now());
    }

    /// Stamp the processed checkpoint (write-once, after consumed)
    pub fn mark_processed(&mut self) {
        debug_assert!(self.consumed_at.is_some(), "processed stamped before consumed");
        debug_assert!(self.processed_at.is_none(), "processed checkpoint is write-once");
        self.processed_at = Some(Instant::now());
    }

    /// Elapsed time from creation to completed matching
    ///
    /// `None` until the processed checkpoint has been stamped.
    pub fn end_to_end_latency(&self) -> Option<Duration> {
        self.processed_at.map(|done| done.duration_since(self.produced_at))
    }

    /// True once the remaining quantity has reached zero
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_order(side: Side, price: i64, qty: i64) -> Order {
        Order::new(OrderId::new(1), side, Price::new(price), Quantity::new(qty))
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::BUY.opposite(), Side::SELL);
        assert_eq!(Side::SELL.opposite(), Side::BUY);
    }

    #[test]
    fn test_new_order_has_only_produced_checkpoint() {
        let order = test_order(Side::BUY, 100, 5);
        assert!(order.consumed_at.is_none());
        assert!(order.processed_at.is_none());
        assert!(order.end_to_end_latency().is_none());
        assert!(!order.is_filled());
    }

    #[test]
    fn test_checkpoints_are_monotonic() {
        let mut order = test_order(Side::SELL, 100, 5);
        order.mark_consumed();
        order.mark_processed();

        let consumed = order.consumed_at.unwrap();
        let processed = order.processed_at.unwrap();
        assert!(order.produced_at <= consumed);
        assert!(consumed <= processed);
    }

    #[test]
    fn test_end_to_end_latency_after_processing() {
        let mut order = test_order(Side::BUY, 100, 5);
        order.mark_consumed();
        order.mark_processed();
        assert!(order.end_to_end_latency().is_some());
    }

    #[test]
    fn test_is_filled_once_quantity_reaches_zero() {
        let mut order = test_order(Side::BUY, 100, 5);
        order.quantity -= Quantity::new(5);
        assert!(order.is_filled());
    }
}
