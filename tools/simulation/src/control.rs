//! Cooperative shutdown signal
//!
//! A single run-flag transition from running to stopped is the only
//! cancellation signal in the pipeline. It is observed at the top of each
//! task's loop iteration, bounding shutdown latency to one iteration plus
//! queue drain time. The stop is global and one-shot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle over the shared run-flag
///
/// `stop()` publishes with Release ordering and `is_running()` reads with
/// Acquire, so producers observe the stop signal promptly. Injected into
/// each task at construction rather than held as a process global.
#[derive(Debug, Clone)]
pub struct RunFlag {
    running: Arc<AtomicBool>,
}

impl RunFlag {
    /// Create a flag in the running state
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// True until `stop()` has been called on any clone
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Signal all tasks to wind down; idempotent
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}
