//! Order identifiers and the shared id generator
//!
//! Order ids are assigned from a single atomic counter shared by every
//! producer, giving a total order of creation across threads. The counter
//! is an injected handle rather than a process-wide global so tests can
//! instantiate isolated generators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for an order
///
/// Monotonically increasing in creation order across all producers.
/// The ordering reflects creation, not execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create from a raw id value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cloneable handle over a shared atomic order-id counter
///
/// Every clone draws from the same counter, so ids stay globally unique
/// no matter how many producer threads hold a handle. Relaxed ordering is
/// sufficient: only uniqueness matters, not inter-thread ordering.
#[derive(Debug, Clone)]
pub struct OrderIdGenerator {
    next: Arc<AtomicU64>,
}

impl OrderIdGenerator {
    /// Create a fresh generator starting at id 0
    pub fn new() -> Self {
        Self {
            next: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Reserve and return the next unique id
    pub fn next_id(&self) -> OrderId {
        OrderId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_ids_are_sequential_single_thread() {
        let gen = OrderIdGenerator::new();
        assert_eq!(gen.next_id(), OrderId::new(0));
        assert_eq!(gen.next_id(), OrderId::new(1));
        assert_eq!(gen.next_id(), OrderId::new(2));
        assert_eq!(gen.issued(), 3);
    }

    #[test]
    fn test_clones_share_the_counter() {
        let gen = OrderIdGenerator::new();
        let clone = gen.clone();
        let a = gen.next_id();
        let b = clone.next_id();
        assert_ne!(a, b);
        assert_eq!(gen.issued(), 2);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let gen = OrderIdGenerator::new();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gen = gen.clone();
                thread::spawn(move || (0..1000).map(|_| gen.next_id().as_u64()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 4000);
        assert_eq!(gen.issued(), 4000);
    }
}
