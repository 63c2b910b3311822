//! Latency sample recorder and percentile reporter
//!
//! The recorder is an append-only sequence of end-to-end latencies in
//! nanoseconds, single-writer (the consumer) during collection. Summary
//! statistics are computed post-run, single-threaded.
//!
//! Percentiles use 0-indexed nearest-rank selection over the ascending
//! sorted samples: `index = floor(count * fraction)` clamped to
//! `count - 1`. For samples `[1..=10]` that makes p50 the value at index
//! 5, which is 6.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Append-only latency sample set, one entry per fully processed order
#[derive(Debug, Clone, Default)]
pub struct LatencyRecorder {
    samples_ns: Vec<i64>,
}

impl LatencyRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            samples_ns: Vec::new(),
        }
    }

    /// Append one end-to-end latency sample
    pub fn record(&mut self, latency_ns: i64) {
        self.samples_ns.push(latency_ns);
    }

    /// Number of samples collected
    pub fn len(&self) -> usize {
        self.samples_ns.len()
    }

    /// True if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.samples_ns.is_empty()
    }

    /// Collected samples in arrival order
    pub fn samples(&self) -> &[i64] {
        &self.samples_ns
    }

    /// Sort and summarize; `None` when no samples were recorded
    ///
    /// An empty sample set is reported as "no data" rather than computing
    /// statistics over an empty sequence.
    pub fn summarize(mut self) -> Option<LatencyReport> {
        if self.samples_ns.is_empty() {
            return None;
        }
        self.samples_ns.sort_unstable();

        let count = self.samples_ns.len();
        let sum: i64 = self.samples_ns.iter().sum();

        Some(LatencyReport {
            count,
            mean_ns: sum as f64 / count as f64,
            min_ns: self.samples_ns[0],
            p50_ns: nearest_rank(&self.samples_ns, 0.50),
            p90_ns: nearest_rank(&self.samples_ns, 0.90),
            p99_ns: nearest_rank(&self.samples_ns, 0.99),
            max_ns: self.samples_ns[count - 1],
        })
    }
}

/// Nearest-rank percentile: floor(count * fraction), clamped to the last index
fn nearest_rank(sorted_ns: &[i64], fraction: f64) -> i64 {
    debug_assert!(!sorted_ns.is_empty());
    let index = (sorted_ns.len() as f64 * fraction) as usize;
    sorted_ns[index.min(sorted_ns.len() - 1)]
}

/// End-to-end latency summary over one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyReport {
    pub count: usize,
    pub mean_ns: f64,
    pub min_ns: i64,
    pub p50_ns: i64,
    pub p90_ns: i64,
    pub p99_ns: i64,
    pub max_ns: i64,
}

/// Nanoseconds to display microseconds
fn to_us(ns: f64) -> f64 {
    ns / 1_000.0
}

impl fmt::Display for LatencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Latency Statistics (End-to-End) ---")?;
        writeln!(f, "Total Orders: {}", self.count)?;
        writeln!(f, "Mean:         {:.2} us", to_us(self.mean_ns))?;
        writeln!(f, "Min:          {:.2} us", to_us(self.min_ns as f64))?;
        writeln!(f, "Median (p50): {:.2} us", to_us(self.p50_ns as f64))?;
        writeln!(f, "p90:          {:.2} us", to_us(self.p90_ns as f64))?;
        writeln!(f, "p99:          {:.2} us", to_us(self.p99_ns as f64))?;
        write!(f, "Max:          {:.2} us", to_us(self.max_ns as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn recorder_with(samples: &[i64]) -> LatencyRecorder {
        let mut recorder = LatencyRecorder::new();
        for &s in samples {
            recorder.record(s);
        }
        recorder
    }

    #[test]
    fn test_empty_recorder_reports_no_data() {
        assert!(LatencyRecorder::new().summarize().is_none());
    }

    #[test]
    fn test_single_sample() {
        let report = recorder_with(&[1_000]).summarize().unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.min_ns, 1_000);
        assert_eq!(report.max_ns, 1_000);
        assert_eq!(report.p50_ns, 1_000);
        assert_eq!(report.p90_ns, 1_000);
        assert_eq!(report.p99_ns, 1_000);
        assert_eq!(report.mean_ns, 1_000.0);
    }

    #[test]
    fn test_two_samples_percentile_boundaries() {
        let report = recorder_with(&[10, 20]).summarize().unwrap();
        // floor(2 * 0.5) = 1 -> 20; floor(2 * 0.9) = 1 -> 20
        assert_eq!(report.p50_ns, 20);
        assert_eq!(report.p90_ns, 20);
        assert_eq!(report.p99_ns, 20);
        assert_eq!(report.min_ns, 10);
        assert_eq!(report.max_ns, 20);
        assert_eq!(report.mean_ns, 15.0);
    }

    #[test]
    fn test_ten_samples_nearest_rank_convention() {
        let report = recorder_with(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
            .summarize()
            .unwrap();
        // 0-indexed nearest rank: floor(10 * 0.5) = index 5 -> value 6
        assert_eq!(report.p50_ns, 6);
        // floor(10 * 0.9) = index 9 -> value 10
        assert_eq!(report.p90_ns, 10);
        // floor(10 * 0.99) = index 9 -> value 10
        assert_eq!(report.p99_ns, 10);
        assert_eq!(report.mean_ns, 5.5);
        assert_eq!(report.min_ns, 1);
        assert_eq!(report.max_ns, 10);
    }

    #[test]
    fn test_samples_sorted_before_ranking() {
        let report = recorder_with(&[50, 10, 40, 20, 30]).summarize().unwrap();
        assert_eq!(report.min_ns, 10);
        assert_eq!(report.max_ns, 50);
        // floor(5 * 0.5) = index 2 -> 30
        assert_eq!(report.p50_ns, 30);
    }

    proptest! {
        #[test]
        fn prop_percentiles_are_ordered(
            samples in prop::collection::vec(0i64..1_000_000_000, 1..200)
        ) {
            let report = recorder_with(&samples).summarize().unwrap();
            prop_assert!(report.min_ns <= report.p50_ns);
            prop_assert!(report.p50_ns <= report.p90_ns);
            prop_assert!(report.p90_ns <= report.p99_ns);
            prop_assert!(report.p99_ns <= report.max_ns);
        }

        #[test]
        fn prop_every_percentile_is_an_observed_sample(
            samples in prop::collection::vec(0i64..1_000_000_000, 1..200)
        ) {
            let report = recorder_with(&samples).summarize().unwrap();
            prop_assert!(samples.contains(&report.p50_ns));
            prop_assert!(samples.contains(&report.p90_ns));
            prop_assert!(samples.contains(&report.p99_ns));
        }
    }

    #[test]
    fn test_display_in_microseconds() {
        let report = recorder_with(&[1_500, 2_500]).summarize().unwrap();
        let rendered = report.to_string();
        assert!(rendered.contains("Total Orders: 2"));
        assert!(rendered.contains("Mean:         2.00 us"));
        assert!(rendered.contains("Min:          1.50 us"));
        assert!(rendered.contains("Max:          2.50 us"));
    }
}
