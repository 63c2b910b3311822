//! Sequential limit-order matching engine
//!
//! Price-level order book with price-priority matching, partial fills,
//! and resting liquidity. The book is owned exclusively by a single
//! consumer thread and is never accessed concurrently.
//!
//! # Modules
//! - `book`: bid and ask sides as aggregated price levels
//! - `crossing`: price-compatibility predicates
//! - `engine`: the `OrderBook` matcher and top-of-book queries

pub mod book;
pub mod crossing;
pub mod engine;

pub use engine::{OrderBook, TopOfBook};
