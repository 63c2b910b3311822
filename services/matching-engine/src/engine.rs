//! Matching engine core
//!
//! The `OrderBook` routes incoming orders to the appropriate match path,
//! consumes resting liquidity in price-priority order, and rests any
//! unfilled remainder. Price-time priority is approximated at price-level
//! granularity: quantity at the same price is fungible, with no
//! intra-level FIFO of individual orders.

use serde::Serialize;
use std::fmt;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use crate::book::{AskBook, BidBook};
use crate::crossing;

/// Sequential price-level order book
///
/// Owned exclusively by the single consumer thread for its entire life.
/// Safe to inspect only after that thread has fully drained and stopped.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
        }
    }

    /// Match an incoming order against the book
    ///
    /// Mutates the order's remaining quantity and the book's levels. On
    /// return the order's quantity is the unfilled remainder, zero if
    /// fully matched; any positive remainder has been rested on the
    /// order's own side at its limit price.
    pub fn process(&mut self, order: &mut Order) {
        debug_assert!(
            !order.quantity.is_zero(),
            "zero-quantity order reached the book"
        );
        match order.side {
            Side::BUY => self.match_buy(order),
            Side::SELL => self.match_sell(order),
        }
    }

    /// Consume ask levels from the lowest price upward
    ///
    /// Stops as soon as the buy is unwilling to pay the level's price;
    /// no level above the order's limit is ever touched.
    fn match_buy(&mut self, order: &mut Order) {
        while !order.quantity.is_zero() {
            let Some((ask_price, level_qty)) = self.asks.best_level_mut() else {
                break;
            };
            if !crossing::can_match(order.price, ask_price) {
                break;
            }

            let matched = order.quantity.min(*level_qty);
            order.quantity -= matched;
            *level_qty -= matched;

            if level_qty.is_zero() {
                self.asks.remove_level(ask_price);
            }
        }

        if !order.quantity.is_zero() {
            self.bids.insert(order.price, order.quantity);
        }
    }

    /// Consume bid levels from the highest price downward
    fn match_sell(&mut self, order: &mut Order) {
        while !order.quantity.is_zero() {
            let Some((bid_price, level_qty)) = self.bids.best_level_mut() else {
                break;
            };
            if !crossing::can_match(bid_price, order.price) {
                break;
            }

            let matched = order.quantity.min(*level_qty);
            order.quantity -= matched;
            *level_qty -= matched;

            if level_qty.is_zero() {
                self.bids.remove_level(bid_price);
            }
        }

        if !order.quantity.is_zero() {
            self.asks.insert(order.price, order.quantity);
        }
    }

    /// Read-only best bid and best ask
    pub fn top_of_book(&self) -> TopOfBook {
        TopOfBook {
            bid: self.bids.best_bid(),
            ask: self.asks.best_ask(),
        }
    }

    /// Bid side, read-only
    pub fn bids(&self) -> &BidBook {
        &self.bids
    }

    /// Ask side, read-only
    pub fn asks(&self) -> &AskBook {
        &self.asks
    }
}

/// Best level on each side, or `None` for an empty side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopOfBook {
    pub bid: Option<(Price, Quantity)>,
    pub ask: Option<(Price, Quantity)>,
}

impl fmt::Display for TopOfBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Top of Book ---")?;
        match self.bid {
            Some((price, qty)) => writeln!(f, "BIDS: {qty} @ {price}")?,
            None => writeln!(f, "BIDS: [EMPTY]")?,
        }
        match self.ask {
            Some((price, qty)) => writeln!(f, "ASKS: {qty} @ {price}")?,
            None => writeln!(f, "ASKS: [EMPTY]")?,
        }
        write!(f, "-------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;

    fn order(id: u64, side: Side, price: i64, qty: i64) -> Order {
        Order::new(OrderId::new(id), side, Price::new(price), Quantity::new(qty))
    }

    #[test]
    fn test_buy_rests_in_empty_book() {
        let mut book = OrderBook::new();
        let mut buy = order(1, Side::BUY, 100, 5);

        book.process(&mut buy);

        assert!(!buy.is_filled());
        assert_eq!(book.bids().best_bid(), Some((Price::new(100), Quantity::new(5))));
        assert!(book.asks().is_empty());
    }

    #[test]
    fn test_sell_matches_resting_bid_partially() {
        let mut book = OrderBook::new();
        let mut buy = order(1, Side::BUY, 100, 5);
        book.process(&mut buy);

        let mut sell = order(2, Side::SELL, 100, 3);
        book.process(&mut sell);

        assert!(sell.is_filled());
        assert_eq!(book.bids().best_bid(), Some((Price::new(100), Quantity::new(2))));
        assert!(book.asks().is_empty());
    }

    #[test]
    fn test_sell_sweeps_bid_and_rests_remainder() {
        let mut book = OrderBook::new();
        let mut buy = order(1, Side::BUY, 100, 2);
        book.process(&mut buy);

        let mut sell = order(2, Side::SELL, 99, 10);
        book.process(&mut sell);

        assert_eq!(sell.quantity, Quantity::ZERO);
        assert!(book.bids().is_empty());
        assert_eq!(book.asks().best_ask(), Some((Price::new(99), Quantity::new(8))));
    }

    #[test]
    fn test_buy_stops_at_price_limit() {
        let mut book = OrderBook::new();
        for (price, qty) in [(98, 3), (100, 4), (103, 5)] {
            let mut sell = order(price as u64, Side::SELL, price, qty);
            book.process(&mut sell);
        }

        // Willing to pay up to 100: consumes the 98 and 100 levels only
        let mut buy = order(10, Side::BUY, 100, 20);
        book.process(&mut buy);

        assert_eq!(book.asks().best_ask(), Some((Price::new(103), Quantity::new(5))));
        // 20 - 3 - 4 = 13 rests as a bid at 100
        assert_eq!(book.bids().best_bid(), Some((Price::new(100), Quantity::new(13))));
    }

    #[test]
    fn test_buy_consumes_multiple_levels_exactly() {
        let mut book = OrderBook::new();
        for (id, price, qty) in [(1, 98, 3), (2, 99, 4)] {
            let mut sell = order(id, Side::SELL, price, qty);
            book.process(&mut sell);
        }

        let mut buy = order(3, Side::BUY, 100, 7);
        book.process(&mut buy);

        assert!(buy.is_filled());
        assert!(book.asks().is_empty());
        assert!(book.bids().is_empty());
    }

    #[test]
    fn test_partial_level_consumption_keeps_level() {
        let mut book = OrderBook::new();
        let mut sell = order(1, Side::SELL, 100, 10);
        book.process(&mut sell);

        let mut buy = order(2, Side::BUY, 100, 4);
        book.process(&mut buy);

        assert!(buy.is_filled());
        assert_eq!(book.asks().best_ask(), Some((Price::new(100), Quantity::new(6))));
    }

    #[test]
    fn test_non_crossing_orders_rest_on_both_sides() {
        let mut book = OrderBook::new();
        let mut buy = order(1, Side::BUY, 99, 5);
        let mut sell = order(2, Side::SELL, 101, 7);
        book.process(&mut buy);
        book.process(&mut sell);

        let top = book.top_of_book();
        assert_eq!(top.bid, Some((Price::new(99), Quantity::new(5))));
        assert_eq!(top.ask, Some((Price::new(101), Quantity::new(7))));
    }

    #[test]
    fn test_top_of_book_display_empty() {
        let book = OrderBook::new();
        let rendered = book.top_of_book().to_string();
        assert!(rendered.contains("BIDS: [EMPTY]"));
        assert!(rendered.contains("ASKS: [EMPTY]"));
    }

    #[test]
    fn test_top_of_book_display_levels() {
        let mut book = OrderBook::new();
        let mut buy = order(1, Side::BUY, 100, 5);
        book.process(&mut buy);

        let rendered = book.top_of_book().to_string();
        assert!(rendered.contains("BIDS: 5 @ 100"));
        assert!(rendered.contains("ASKS: [EMPTY]"));
    }
}
