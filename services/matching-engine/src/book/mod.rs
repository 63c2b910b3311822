//! Order book infrastructure module
//!
//! Contains the bid and ask book implementations. Each side stores
//! aggregated quantity per price level; no per-order identity survives
//! the merge into a level.

pub mod ask_book;
pub mod bid_book;

pub use ask_book::AskBook;
pub use bid_book::BidBook;
