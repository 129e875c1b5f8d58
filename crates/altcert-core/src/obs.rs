//! Structured observability hooks for the certificate sweep.
//!
//! This module provides:
//! - A sweep-scoped tracing span via the `SweepSpan` RAII guard
//! - Emission functions for sweep start, interval emission, completion,
//!   cancellation and batch compression
//!
//! Lifecycle events are emitted at `info!`; per-interval events at `debug!`.

use tracing::{debug, info, warn};

use crate::certificate::Interval;

/// RAII guard that enters a sweep-scoped span for the duration of a build.
///
/// # Example
///
/// ```ignore
/// let _span = SweepSpan::enter(7);
/// // events emitted here carry k = 7
/// ```
pub struct SweepSpan {
    _span: tracing::span::EnteredSpan,
}

impl SweepSpan {
    pub fn enter(k: usize) -> Self {
        let span = tracing::info_span!("altcert.sweep", k = k);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: sweep started over `k` sequences.
pub fn emit_sweep_started(k: usize) {
    info!(event = "sweep.started", k = k);
}

/// Emit event: one interval appended to the certificate.
pub fn emit_interval_emitted(position: usize, interval: &Interval) {
    debug!(
        event = "sweep.interval",
        position = position,
        interval = %interval,
        witness = ?interval.witness(),
    );
}

/// Emit event: certificate finished.
pub fn emit_certificate_built(k: usize, delta: usize, seeks: u64) {
    info!(
        event = "sweep.finished",
        k = k,
        delta = delta,
        seeks = seeks,
    );
}

/// Emit event: sweep abandoned through its cancel flag (warning level).
pub fn emit_sweep_cancelled(k: usize, emitted: usize) {
    warn!(event = "sweep.cancelled", k = k, emitted = emitted);
}

/// Emit event: a batch of sequences was run-length compressed.
pub fn emit_batch_compressed(sequences: usize, runs: usize, universe: Option<(i64, i64)>) {
    info!(
        event = "runs.compressed",
        sequences = sequences,
        runs = runs,
        universe = ?universe,
    );
}
