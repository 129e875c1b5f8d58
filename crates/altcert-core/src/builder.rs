//! Greedy partition-certificate sweep.
//!
//! The sweep keeps a single `left` bound that only moves right. At each step
//! every sequence is asked for its successor of the probe point; the largest
//! answer is the furthest point the sweep can be forced to, and the sequence
//! giving it has no element in between, so it witnesses the gap. If every
//! sequence also contains that point, it is an intersection point and
//! becomes a singleton.
//!
//! After a singleton `{x}` the probe restarts at `x + 1`, so adjacent shared
//! points (`5` and `6` in every sequence) yield `{5}, {6}` with no
//! zero-width gap between them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::bound::Bound;
use crate::certificate::{Certificate, Interval};
use crate::config::{BuilderConfig, SeekBackend};
use crate::error::{AltcertError, Result};
use crate::obs::{
    emit_certificate_built, emit_interval_emitted, emit_sweep_cancelled, emit_sweep_started,
    SweepSpan,
};
use crate::runs::compress_batch;
use crate::seek::SuccessorQuery;
use crate::sequence::{sequences_from, Sequence};
use crate::METRICS;

/// Shared flag for cooperative cancellation, checked once per sweep step.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Builds partition certificates from any [`SuccessorQuery`] sources.
#[derive(Debug, Clone, Default)]
pub struct CertificateBuilder {
    config: BuilderConfig,
}

impl CertificateBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Sweep over `sources`, one per sequence.
    pub fn build<S: SuccessorQuery>(&self, sources: &[S]) -> Result<Certificate> {
        self.sweep(sources, None)
    }

    /// Like [`CertificateBuilder::build`], returning
    /// [`AltcertError::Cancelled`] once `cancel` is set.
    pub fn build_with_cancel<S: SuccessorQuery>(
        &self,
        sources: &[S],
        cancel: &CancelFlag,
    ) -> Result<Certificate> {
        self.sweep(sources, Some(cancel))
    }

    /// Sweep over normalised sequences using the configured backend.
    pub fn build_sequences(&self, sequences: &[Sequence]) -> Result<Certificate> {
        match self.config.backend {
            SeekBackend::Raw => self.build(sequences),
            SeekBackend::Compressed => {
                let runs = compress_batch(sequences)?;
                self.build(&runs)
            }
        }
    }

    fn sweep<S: SuccessorQuery>(
        &self,
        sources: &[S],
        cancel: Option<&CancelFlag>,
    ) -> Result<Certificate> {
        let k = sources.len();
        let _span = SweepSpan::enter(k);
        emit_sweep_started(k);

        let mut sweep = Sweep {
            sources,
            seeks: 0,
            intervals: Vec::new(),
            trace: self.config.trace_intervals,
        };
        let mut left = Bound::NegInf;
        let mut after_singleton = false;

        loop {
            if cancel.is_some_and(CancelFlag::is_cancelled) {
                let emitted = sweep.intervals.len();
                emit_sweep_cancelled(k, emitted);
                return Err(AltcertError::Cancelled { emitted });
            }

            let probe = if after_singleton {
                left.successor()
            } else {
                left
            };
            if probe == Bound::PosInf {
                // A singleton at i64::MAX already reaches the end of the line.
                break;
            }

            let (current, witness) = sweep.furthest(probe);
            if sweep.all_contain(current) {
                if probe < current {
                    sweep.push(Interval::certified(left, current, witness, after_singleton)?);
                }
                if let Bound::Finite(point) = current {
                    sweep.push(Interval::singleton(point));
                }
                left = current;
                after_singleton = true;
            } else {
                sweep.push(Interval::certified(left, current, witness, after_singleton)?);
                left = current;
                after_singleton = false;
                if current == Bound::PosInf {
                    break;
                }
            }
        }

        let delta = sweep.intervals.len();
        METRICS.record_certificate(delta as u64, sweep.seeks);
        emit_certificate_built(k, delta, sweep.seeks);
        Ok(Certificate::with_seeks(sweep.intervals, sweep.seeks))
    }
}

struct Sweep<'a, S> {
    sources: &'a [S],
    seeks: u64,
    intervals: Vec<Interval>,
    trace: bool,
}

impl<S: SuccessorQuery> Sweep<'_, S> {
    /// Largest successor of `probe` and the lowest index attaining it.
    /// With no sources the sweep jumps straight to `PosInf`.
    fn furthest(&mut self, probe: Bound) -> (Bound, Option<usize>) {
        let mut best: Option<(Bound, usize)> = None;
        for (i, source) in self.sources.iter().enumerate() {
            self.seeks += 1;
            let hit = source.seek(probe);
            if best.map_or(true, |(value, _)| hit > value) {
                best = Some((hit, i));
            }
        }
        match best {
            Some((value, i)) => (value, Some(i)),
            None => (Bound::PosInf, None),
        }
    }

    fn all_contain(&mut self, point: Bound) -> bool {
        if !point.is_finite() {
            return false;
        }
        let seeks = &mut self.seeks;
        self.sources.iter().all(|source| {
            *seeks += 1;
            source.seek(point) == point
        })
    }

    fn push(&mut self, interval: Interval) {
        if self.trace {
            emit_interval_emitted(self.intervals.len(), &interval);
        }
        self.intervals.push(interval);
    }
}

/// Certificate of plain integer lists with the default configuration.
pub fn alternation_certificate<T: AsRef<[i64]>>(lists: &[T]) -> Result<Certificate> {
    let sequences = sequences_from(lists.iter().map(|list| list.as_ref()));
    CertificateBuilder::default().build_sequences(&sequences)
}

/// Alternation complexity δ of plain integer lists.
pub fn alternation_complexity<T: AsRef<[i64]>>(lists: &[T]) -> Result<usize> {
    Ok(alternation_certificate(lists)?.delta())
}
