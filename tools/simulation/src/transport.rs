//! Order hand-off queue contract
//!
//! The queue is the sole synchronization primitive between producers and
//! the consumer. It is consumed purely through this contract: non-blocking
//! enqueue from many threads, non-blocking best-effort dequeue from one
//! thread, and an advisory size query that may be stale. The trait exists
//! so any concrete MPSC implementation can be substituted without touching
//! the pipeline.

use crossbeam_queue::SegQueue;
use types::errors::TransportError;
use types::order::Order;

/// Non-blocking multi-producer/single-consumer hand-off channel
pub trait OrderTransport: Send + Sync {
    /// Enqueue an order; never blocks
    ///
    /// Fails only on resource exhaustion in the underlying structure,
    /// which is fatal to the enqueuing producer.
    fn enqueue(&self, order: Order) -> Result<(), TransportError>;

    /// Attempt a dequeue; returns immediately
    ///
    /// `None` means the queue was momentarily empty. That is normal
    /// control flow, not an error.
    fn try_dequeue(&self) -> Option<Order>;

    /// Advisory element count; may be stale by the time it is read
    fn approximate_len(&self) -> usize;
}

/// Unbounded lock-free transport backed by `crossbeam_queue::SegQueue`
///
/// SegQueue grows as needed, so enqueue cannot fail short of allocation
/// failure aborting the process. `len()` is linearizable at the moment of
/// the call but advisory by the time the caller acts on it, matching the
/// approximate-size contract.
#[derive(Debug, Default)]
pub struct SegQueueTransport {
    queue: SegQueue<Order>,
}

impl SegQueueTransport {
    /// Create an empty transport
    pub fn new() -> Self {
        Self {
            queue: SegQueue::new(),
        }
    }
}

impl OrderTransport for SegQueueTransport {
    fn enqueue(&self, order: Order) -> Result<(), TransportError> {
        self.queue.push(order);
        Ok(())
    }

    fn try_dequeue(&self) -> Option<Order> {
        self.queue.pop()
    }

    fn approximate_len(&self) -> usize {
        self.queue.len()
    }
}
