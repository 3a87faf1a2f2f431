//! Observability stubs (metrics, tracing)

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording load counters
#[derive(Debug, Default)]
pub struct Metrics {
    loads_started: AtomicU64,
    payloads_delivered: AtomicU64,
    loads_failed: AtomicU64,
    loads_cancelled: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_started(&self) {
        self.loads_started.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "loads_started", "Metric incremented");
    }

    pub fn payload_delivered(&self) {
        self.payloads_delivered.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "payloads_delivered", "Metric incremented");
    }

    pub fn load_failed(&self) {
        self.loads_failed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "loads_failed", "Metric incremented");
    }

    pub fn load_cancelled(&self) {
        self.loads_cancelled.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "loads_cancelled", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            loads_started: self.loads_started.load(Ordering::Relaxed),
            payloads_delivered: self.payloads_delivered.load(Ordering::Relaxed),
            loads_failed: self.loads_failed.load(Ordering::Relaxed),
            loads_cancelled: self.loads_cancelled.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub loads_started: u64,
    pub payloads_delivered: u64,
    pub loads_failed: u64,
    pub loads_cancelled: u64,
}
