//! Store metrics collection.
//!
//! Provides standardized metrics for monitoring store operations:
//! - Request counters by operation and status
//! - Latency histograms

use metrics::{counter, histogram};

// =============================================================================
// Metric Names
// =============================================================================

/// Metric name constants for consistency.
pub mod names {
    /// Total store requests by operation and status.
    pub const REQUESTS_TOTAL: &str = "store_requests_total";

    /// Request latency in seconds by operation.
    pub const LATENCY_SECONDS: &str = "store_latency_seconds";
}

// =============================================================================
// Recording Functions
// =============================================================================

/// Record metrics for a completed store request.
pub fn record_request(operation: &str, status: u16, latency_ms: f64) {
    let status_str = status.to_string();

    counter!(
        names::REQUESTS_TOTAL,
        "operation" => operation.to_string(),
        "status" => status_str
    )
    .increment(1);

    histogram!(
        names::LATENCY_SECONDS,
        "operation" => operation.to_string()
    )
    .record(latency_ms / 1000.0);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names() {
        assert!(names::REQUESTS_TOTAL.contains("requests"));
        assert!(names::LATENCY_SECONDS.contains("latency"));
    }
}
