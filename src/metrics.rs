//! Per-tool success/failure accounting
//!
//! Counters the agent loop uses to decide which tools keep earning their
//! place. Shared-reference recording with atomics, so a `ToolMetrics` can sit
//! behind an `Arc` next to the tool it describes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Success/failure counters for one tool
pub struct ToolMetrics {
    name: String,
    successes: AtomicU64,
    failures: AtomicU64,
    retries: AtomicU64,
}

impl ToolMetrics {
    /// Create a collector for the named tool
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            successes: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            retries: AtomicU64::new(0),
        }
    }

    /// Name of the tool these counters describe
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a successful call
    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::SeqCst);
    }

    /// Record a failed call
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::SeqCst);
    }

    /// Record a retry attempt
    pub fn record_retry(&self) {
        self.retries.fetch_add(1, Ordering::SeqCst);
    }

    pub fn successes(&self) -> u64 {
        self.successes.load(Ordering::SeqCst)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::SeqCst)
    }

    pub fn retries(&self) -> u64 {
        self.retries.load(Ordering::SeqCst)
    }

    /// Total recorded calls (successes plus failures)
    pub fn total(&self) -> u64 {
        self.successes() + self.failures()
    }

    /// Fraction of calls that succeeded, `0.0` when nothing is recorded
    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.successes() as f64 / total as f64
    }

    /// Zero all counters
    pub fn reset(&self) {
        self.successes.store(0, Ordering::SeqCst);
        self.failures.store(0, Ordering::SeqCst);
        self.retries.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_metrics_report_zero_rate() {
        let metrics = ToolMetrics::new("excel_analysis");
        assert_eq!(metrics.total(), 0);
        assert!((metrics.success_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn success_rate_reflects_recorded_calls() {
        let metrics = ToolMetrics::new("web_search");
        metrics.record_success();
        metrics.record_success();
        metrics.record_failure();
        metrics.record_retry();

        assert_eq!(metrics.successes(), 2);
        assert_eq!(metrics.failures(), 1);
        assert_eq!(metrics.retries(), 1);
        assert_eq!(metrics.total(), 3);
        assert!((metrics.success_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn reset_zeroes_everything() {
        let metrics = ToolMetrics::new("audio_transcription");
        metrics.record_success();
        metrics.record_failure();
        metrics.record_retry();
        metrics.reset();

        assert_eq!(metrics.total(), 0);
        assert_eq!(metrics.retries(), 0);
        assert!((metrics.success_rate() - 0.0).abs() < f64::EPSILON);
    }
}
