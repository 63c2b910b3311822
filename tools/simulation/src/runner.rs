//! Thread orchestration for a full pipeline run
//!
//! Spawns the single consumer and N producers, lets the run proceed for
//! the configured duration, flips the run-flag, joins producers, then
//! joins the consumer once it has drained the queue. A producer failure
//! or panic leaves the run intact; it is logged and surfaced in the
//! report. A consumer panic is fatal since the book state would be
//! untrustworthy.

use crate::config::SimConfig;
use crate::consumer::Consumer;
use crate::control::RunFlag;
use crate::latency::LatencyReport;
use crate::producer::Producer;
use crate::transport::{OrderTransport, SegQueueTransport};
use matching_engine::TopOfBook;
use serde::Serialize;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use types::errors::PipelineError;
use types::ids::OrderIdGenerator;

/// Aggregated outcome of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Orders successfully enqueued across all surviving producers
    pub produced: u64,
    /// Orders dequeued and matched by the consumer
    pub processed: u64,
    /// Producers that died to a fatal error or panic
    pub producer_failures: usize,
    /// Wall-clock time from first spawn to consumer exit
    pub elapsed: Duration,
    /// Final book state after the drain
    pub top_of_book: TopOfBook,
    /// Latency summary; `None` when no orders were processed
    pub latency: Option<LatencyReport>,
}

/// Orchestrates one complete producer/consumer run
pub struct SimRunner {
    config: SimConfig,
}

impl SimRunner {
    /// Create a runner for the given configuration
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Execute the run to completion and return the report
    pub fn run(&self) -> Result<RunReport, PipelineError> {
        let flag = RunFlag::new();
        let ids = OrderIdGenerator::new();
        let transport: Arc<SegQueueTransport> = Arc::new(SegQueueTransport::new());
        let started = Instant::now();

        tracing::info!(
            producers = self.config.producers,
            duration_secs = self.config.duration.as_secs_f64(),
            "starting pipeline run"
        );

        let consumer = Consumer::new(flag.clone(), transport.clone());
        let consumer_handle = thread::Builder::new()
            .name("consumer".to_string())
            .spawn(move || consumer.run())
            .map_err(|e| PipelineError::System {
                message: format!("failed to spawn consumer: {e}"),
            })?;

        let mut producer_handles = Vec::with_capacity(self.config.producers);
        for index in 0..self.config.producers {
            let producer = Producer::new(
                index,
                self.config.producer.clone(),
                ids.clone(),
                flag.clone(),
                transport.clone() as Arc<dyn OrderTransport>,
                self.config.seed,
            );
            let handle = thread::Builder::new()
                .name(format!("producer-{index}"))
                .spawn(move || producer.run())
                .map_err(|e| PipelineError::System {
                    message: format!("failed to spawn producer {index}: {e}"),
                })?;
            producer_handles.push(handle);
        }

        thread::sleep(self.config.duration);
        flag.stop();
        tracing::info!("run-flag dropped, waiting for drain");

        let mut produced: u64 = 0;
        let mut producer_failures: usize = 0;
        for (index, handle) in producer_handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(count)) => produced += count,
                Ok(Err(err)) => {
                    tracing::error!(producer = index, error = %err, "producer failed");
                    producer_failures += 1;
                }
                Err(_) => {
                    tracing::error!(producer = index, "producer panicked");
                    producer_failures += 1;
                }
            }
        }

        // A consumer panic means a matching invariant broke; the book
        // cannot be trusted, so the run as a whole is forfeit.
        let consumer_report = consumer_handle
            .join()
            .expect("consumer thread panicked; book state is untrustworthy");

        let elapsed = started.elapsed();
        tracing::info!(
            produced,
            processed = consumer_report.processed,
            producer_failures,
            "run complete"
        );

        Ok(RunReport {
            produced,
            processed: consumer_report.processed,
            producer_failures,
            elapsed,
            top_of_book: consumer_report.book.top_of_book(),
            latency: consumer_report.latencies.summarize(),
        })
    }
}
