//! Latency-Instrumented Matching Pipeline
//!
//! Feeds a single sequential matching thread from N concurrent order
//! producers over a lock-free MPSC queue and reports the end-to-end
//! latency profile of the pipeline after the run.
//!
//! # Modules
//! - `config`: run parameters, read once at startup
//! - `control`: shared run-flag for cooperative shutdown
//! - `transport`: the non-blocking queue contract and its SegQueue impl
//! - `producer`: order-generating threads with deterministic seeded RNG
//! - `consumer`: the single matching loop with latency checkpoints
//! - `latency`: sample recorder and percentile reporter
//! - `runner`: thread orchestration, shutdown, and the run report
//! - `export`: JSON export of the run report

pub mod config;
pub mod consumer;
pub mod control;
pub mod export;
pub mod latency;
pub mod producer;
pub mod runner;
pub mod transport;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
