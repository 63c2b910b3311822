//! Error types for the matching pipeline
//!
//! Error taxonomy using thiserror. An empty queue on dequeue is normal
//! control flow (`None`), never an error; only genuinely fatal conditions
//! appear here.

use thiserror::Error;

/// Top-level pipeline error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("producer error: {0}")]
    Producer(#[from] ProducerError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("system error: {message}")]
    System { message: String },
}

/// Fatal failures of the order hand-off queue
///
/// Enqueue never blocks and never fails under normal operation; the only
/// failure mode is resource exhaustion in the underlying structure, which
/// is fatal to the enqueuing producer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("queue storage exhausted: {detail}")]
    Exhausted { detail: String },
}

/// Producer-task failures
///
/// Fatal to the failing producer only; the run continues with the
/// remaining producers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProducerError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

/// Startup configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: String, value: String },

    #[error("invalid range for {name}: min {min} exceeds max {max}")]
    InvalidRange { name: String, min: i64, max: i64 },
}
