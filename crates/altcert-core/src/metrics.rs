//! Global atomic counters for sweep observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. at the end of a benchmark batch).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters. No allocations and no locking.
pub struct Metrics {
    certificates_built: AtomicU64,
    intervals_emitted: AtomicU64,
    seeks_issued: AtomicU64,
    sequences_compressed: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            certificates_built: AtomicU64::new(0),
            intervals_emitted: AtomicU64::new(0),
            seeks_issued: AtomicU64::new(0),
            sequences_compressed: AtomicU64::new(0),
        }
    }

    /// Record one finished certificate and the work that went into it.
    pub fn record_certificate(&self, intervals: u64, seeks: u64) {
        self.certificates_built.fetch_add(1, Ordering::Relaxed);
        self.intervals_emitted.fetch_add(intervals, Ordering::Relaxed);
        self.seeks_issued.fetch_add(seeks, Ordering::Relaxed);
        tracing::trace!(metric = "certificates_built", "counter incremented");
    }

    pub fn add_sequences_compressed(&self, n: u64) {
        self.sequences_compressed.fetch_add(n, Ordering::Relaxed);
        tracing::trace!(metric = "sequences_compressed", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            certificates_built = self.certificates_built(),
            intervals_emitted = self.intervals_emitted(),
            seeks_issued = self.seeks_issued(),
            sequences_compressed = self.sequences_compressed(),
        );
    }

    pub fn certificates_built(&self) -> u64 {
        self.certificates_built.load(Ordering::Relaxed)
    }

    pub fn intervals_emitted(&self) -> u64 {
        self.intervals_emitted.load(Ordering::Relaxed)
    }

    pub fn seeks_issued(&self) -> u64 {
        self.seeks_issued.load(Ordering::Relaxed)
    }

    pub fn sequences_compressed(&self) -> u64 {
        self.sequences_compressed.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.certificates_built.store(0, Ordering::Relaxed);
        self.intervals_emitted.store(0, Ordering::Relaxed);
        self.seeks_issued.store(0, Ordering::Relaxed);
        self.sequences_compressed.store(0, Ordering::Relaxed);
    }
}
