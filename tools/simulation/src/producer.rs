//! Order-generating producer task
//!
//! Each producer runs on its own thread: while the run-flag holds, it
//! draws a random side, price, and quantity with a deterministic seeded
//! RNG, stamps the produced checkpoint, enqueues the order, then sleeps
//! the configured think time. The sleep is an open-loop rate limiter, not
//! adaptive backpressure.

use crate::config::ProducerConfig;
use crate::control::RunFlag;
use crate::transport::OrderTransport;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::thread;
use types::errors::ProducerError;
use types::ids::OrderIdGenerator;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

/// A single order producer with its own RNG stream
///
/// The id generator, run-flag, and transport are injected handles shared
/// with the rest of the pipeline.
pub struct Producer {
    index: usize,
    config: ProducerConfig,
    ids: OrderIdGenerator,
    flag: RunFlag,
    transport: Arc<dyn OrderTransport>,
    rng: ChaCha8Rng,
}

impl Producer {
    /// Create a producer; its RNG stream derives from `seed + index`
    pub fn new(
        index: usize,
        config: ProducerConfig,
        ids: OrderIdGenerator,
        flag: RunFlag,
        transport: Arc<dyn OrderTransport>,
        seed: u64,
    ) -> Self {
        Self {
            index,
            config,
            ids,
            flag,
            transport,
            rng: ChaCha8Rng::seed_from_u64(seed.wrapping_add(index as u64)),
        }
    }

    /// Producer thread index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Generate and enqueue orders until the run-flag drops
    ///
    /// Returns the number of orders successfully enqueued. A transport
    /// failure is fatal to this producer only; the rest of the run
    /// continues without it.
    pub fn run(mut self) -> Result<u64, ProducerError> {
        tracing::debug!(producer = self.index, "producer started");
        let mut produced: u64 = 0;

        while self.flag.is_running() {
            let order = self.next_order();
            self.transport.enqueue(order)?;
            produced += 1;
            thread::sleep(self.config.think_time);
        }

        tracing::debug!(producer = self.index, produced, "producer stopped");
        Ok(produced)
    }

    /// Sample one order; the produced checkpoint is stamped in `Order::new`
    fn next_order(&mut self) -> Order {
        let side = if self.rng.gen_bool(0.5) {
            Side::BUY
        } else {
            Side::SELL
        };
        let price = Price::new(
            self.rng
                .gen_range(self.config.min_price..=self.config.max_price),
        );
        let quantity = Quantity::new(
            self.rng
                .gen_range(self.config.min_quantity..=self.config.max_quantity),
        );
        Order::new(self.ids.next_id(), side, price, quantity)
    }
}
