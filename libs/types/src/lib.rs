//! Types library for the matching pipeline
//!
//! This library provides the core type definitions shared between the
//! matching engine and the simulation harness.
//!
//! # Modules
//! - `ids`: Order identifiers and the shared atomic id generator
//! - `numeric`: Integer tick types (Price, Quantity)
//! - `order`: Order record with latency checkpoints
//! - `errors`: Error taxonomy

// Public modules
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
}
