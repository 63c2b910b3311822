//! Single matching-loop consumer
//!
//! The consumer exclusively owns the order book and the latency recorder;
//! no other task ever touches them, so neither needs a lock. Each dequeued
//! order gets its consumed and processed checkpoints stamped around the
//! matching call, and the end-to-end latency is appended to the sample
//! set.

use crate::control::RunFlag;
use crate::latency::LatencyRecorder;
use crate::transport::OrderTransport;
use matching_engine::OrderBook;
use std::sync::Arc;
use std::thread;

/// Final state handed back once the consumer loop exits
///
/// The book is safe to inspect here: the consumer has fully drained and
/// stopped, so there are no further writers.
#[derive(Debug)]
pub struct ConsumerReport {
    pub book: OrderBook,
    pub latencies: LatencyRecorder,
    pub processed: u64,
}

/// The single consuming matching task
pub struct Consumer {
    flag: RunFlag,
    transport: Arc<dyn OrderTransport>,
    book: OrderBook,
    latencies: LatencyRecorder,
    processed: u64,
}

impl Consumer {
    /// Create a consumer over the shared flag and transport
    pub fn new(flag: RunFlag, transport: Arc<dyn OrderTransport>) -> Self {
        Self {
            flag,
            transport,
            book: OrderBook::new(),
            latencies: LatencyRecorder::new(),
            processed: 0,
        }
    }

    /// Drive the matching loop until shutdown and drain complete
    ///
    /// Continues while the run-flag holds or the queue still reports
    /// elements, so every order enqueued before shutdown was signaled is
    /// processed. An empty dequeue while still running yields the
    /// processor and retries; this is a deliberate busy-wait, not a
    /// blocking wait, to keep the consumer responsive on the critical
    /// path.
    pub fn run(mut self) -> ConsumerReport {
        tracing::debug!("consumer started");

        while self.flag.is_running() || self.transport.approximate_len() > 0 {
            match self.transport.try_dequeue() {
                Some(mut order) => {
                    order.mark_consumed();
                    self.book.process(&mut order);
                    order.mark_processed();

                    if let Some(latency) = order.end_to_end_latency() {
                        self.latencies.record(latency.as_nanos() as i64);
                    }
                    self.processed += 1;
                }
                None => {
                    if self.flag.is_running() {
                        thread::yield_now();
                    }
                }
            }
        }

        tracing::debug!(processed = self.processed, "consumer drained and stopped");
        ConsumerReport {
            book: self.book,
            latencies: self.latencies,
            processed: self.processed,
        }
    }
}
