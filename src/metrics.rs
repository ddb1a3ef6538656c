// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Metrics instrumentation for zk-map.
//!
//! Uses the `metrics` crate for backend-agnostic metrics collection.
//! The embedding binary is responsible for choosing the exporter.
//!
//! # Metric Naming Convention
//! - `zk_map_` prefix for all metrics
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Labels
//! - `operation`: contains_key, contains_value, get, insert, remove, clear,
//!   entries
//! - `status`: hit, miss, create, overwrite, success, error

use metrics::{counter, gauge, histogram};
use std::time::{Duration, Instant};

/// Record the outcome of one adapter operation
pub fn record_operation(operation: &str, status: &str) {
    counter!(
        "zk_map_operations_total",
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record operation latency
pub fn record_latency(operation: &str, duration: Duration) {
    histogram!(
        "zk_map_operation_seconds",
        "operation" => operation.to_string()
    )
    .record(duration.as_secs_f64());
}

/// Record how many nodes a full-namespace traversal visited
pub fn record_traversal_nodes(count: usize) {
    histogram!("zk_map_traversal_nodes").record(count as f64);
}

/// Set the locally tracked entry count (the opportunistic size counter)
pub fn set_tracked_entries(count: usize) {
    gauge!("zk_map_tracked_entries").set(count as f64);
}

/// A timing guard that records latency on drop
pub struct LatencyTimer {
    operation: &'static str,
    start: Instant,
}

impl LatencyTimer {
    /// Start a new latency timer
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_latency(self.operation, self.start.elapsed());
    }
}
