//! Basic metrics instrumentation for tracking lookups.
//!
//! Provides counters and duration tracking for phone number lookups.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for tracking lookup outcomes.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of lookups attempted
    lookups_total: Arc<AtomicU64>,

    /// Lookups that ended in a parse error
    parse_errors_total: Arc<AtomicU64>,

    /// Lookups whose number was valid for its region
    valid_numbers_total: Arc<AtomicU64>,

    /// Lookups where the default calling code had to be assumed
    default_code_applied_total: Arc<AtomicU64>,

    /// Total duration of all lookups in microseconds
    lookup_duration_total_us: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            lookups_total: Arc::new(AtomicU64::new(0)),
            parse_errors_total: Arc::new(AtomicU64::new(0)),
            valid_numbers_total: Arc::new(AtomicU64::new(0)),
            default_code_applied_total: Arc::new(AtomicU64::new(0)),
            lookup_duration_total_us: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a lookup with duration.
    pub fn record_lookup(&self, duration: Duration) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);
        self.lookup_duration_total_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a parse error.
    pub fn record_parse_error(&self) {
        self.parse_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a valid number.
    pub fn record_valid_number(&self) {
        self.valid_numbers_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record that the default calling code was assumed.
    pub fn record_default_code_applied(&self) {
        self.default_code_applied_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups_total(&self) -> u64 {
        self.lookups_total.load(Ordering::Relaxed)
    }

    pub fn parse_errors_total(&self) -> u64 {
        self.parse_errors_total.load(Ordering::Relaxed)
    }

    pub fn valid_numbers_total(&self) -> u64 {
        self.valid_numbers_total.load(Ordering::Relaxed)
    }

    pub fn default_code_applied_total(&self) -> u64 {
        self.default_code_applied_total.load(Ordering::Relaxed)
    }

    pub fn lookup_duration_total_us(&self) -> u64 {
        self.lookup_duration_total_us.load(Ordering::Relaxed)
    }

    /// Get average lookup duration in microseconds.
    pub fn lookup_duration_avg_us(&self) -> f64 {
        let total = self.lookup_duration_total_us.load(Ordering::Relaxed);
        let count = self.lookups_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.lookups_total.store(0, Ordering::Relaxed);
        self.parse_errors_total.store(0, Ordering::Relaxed);
        self.valid_numbers_total.store(0, Ordering::Relaxed);
        self.default_code_applied_total.store(0, Ordering::Relaxed);
        self.lookup_duration_total_us.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            lookups_total: self.lookups_total(),
            parse_errors_total: self.parse_errors_total(),
            valid_numbers_total: self.valid_numbers_total(),
            default_code_applied_total: self.default_code_applied_total(),
            lookup_duration_total_us: self.lookup_duration_total_us(),
            lookup_duration_avg_us: self.lookup_duration_avg_us(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub lookups_total: u64,
    pub parse_errors_total: u64,
    pub valid_numbers_total: u64,
    pub default_code_applied_total: u64,
    pub lookup_duration_total_us: u64,
    pub lookup_duration_avg_us: f64,
}

/// Helper for timing lookups.
pub struct LookupTimer {
    start: Instant,
    metrics: Metrics,
}

impl LookupTimer {
    /// Start timing a lookup.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_lookup(duration);
    }

    /// Complete the timing and record as a parse error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_lookup(duration);
        self.metrics.record_parse_error();
    }
}
