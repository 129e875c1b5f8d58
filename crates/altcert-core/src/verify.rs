//! Independent checks for partition certificates.
//!
//! [`verify_certificate`] re-derives every claim a certificate makes from
//! the raw sequences. [`brute_force_delta`] labels each integer of the
//! observed universe one at a time and counts label runs; it is an upper
//! bound on δ and is meant for small universes in tests and regressions.

use crate::bound::Bound;
use crate::certificate::{Certificate, IntervalKind};
use crate::seek::SuccessorQuery;
use crate::sequence::{universe_of, Sequence};

/// A way in which a certificate fails to certify its sequences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificateViolation {
    #[error("certificate has no intervals")]
    Empty,

    #[error("certificate starts at {left} instead of -∞")]
    OpenStart { left: Bound },

    #[error("certificate ends at {end} instead of +∞")]
    OpenEnd { end: Bound },

    #[error("interval {position} covers no integer")]
    EmptyInterval { position: usize },

    #[error("interval {position} does not touch its successor: {end} vs {start}")]
    Discontinuity {
        position: usize,
        end: Bound,
        start: Bound,
    },

    #[error("singleton {value} at interval {position} is missing from sequence {missing}")]
    SingletonNotShared {
        position: usize,
        value: i64,
        missing: usize,
    },

    #[error("interval {position} names no witness")]
    MissingWitness { position: usize },

    #[error("interval {position} names witness {witness} but only {k} sequences exist")]
    UnknownWitness {
        position: usize,
        witness: usize,
        k: usize,
    },

    #[error("witness {witness} of interval {position} contains {value}")]
    WitnessContains {
        position: usize,
        witness: usize,
        value: i64,
    },
}

/// Check the partition, singleton and certification properties of `cert`.
pub fn verify_certificate(
    sequences: &[Sequence],
    cert: &Certificate,
) -> Result<(), CertificateViolation> {
    let intervals = cert.intervals();
    let (first, last) = match (intervals.first(), intervals.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(CertificateViolation::Empty),
    };
    if first.left != Bound::NegInf {
        return Err(CertificateViolation::OpenStart { left: first.left });
    }
    let end = last.coverage().1;
    if end != Bound::PosInf {
        return Err(CertificateViolation::OpenEnd { end });
    }

    let k = sequences.len();
    for (position, interval) in intervals.iter().enumerate() {
        let (start, end) = interval.coverage();
        if start >= end {
            return Err(CertificateViolation::EmptyInterval { position });
        }
        if let Some(next) = intervals.get(position + 1) {
            let next_start = next.coverage().0;
            if end != next_start {
                return Err(CertificateViolation::Discontinuity {
                    position,
                    end,
                    start: next_start,
                });
            }
        }

        match interval.kind {
            IntervalKind::Singleton => {
                let Bound::Finite(value) = interval.left else {
                    return Err(CertificateViolation::EmptyInterval { position });
                };
                if let Some(missing) = sequences.iter().position(|s| !s.contains(value)) {
                    return Err(CertificateViolation::SingletonNotShared {
                        position,
                        value,
                        missing,
                    });
                }
            }
            IntervalKind::Certified { witness: None } if k > 0 => {
                return Err(CertificateViolation::MissingWitness { position });
            }
            IntervalKind::Certified { witness: None } => {}
            IntervalKind::Certified {
                witness: Some(witness),
            } => {
                let sequence = sequences.get(witness).ok_or(
                    CertificateViolation::UnknownWitness {
                        position,
                        witness,
                        k,
                    },
                )?;
                if let Bound::Finite(value) = sequence.seek(start) {
                    if Bound::Finite(value) < end {
                        return Err(CertificateViolation::WitnessContains {
                            position,
                            witness,
                            value,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Label {
    Point,
    Witness(usize),
}

/// Count label runs of a per-integer labelling of the line.
///
/// Positions are the integers of the observed universe plus one position for
/// each unbounded flank. Each intersection point is its own run. Any other
/// position keeps the previous witness while that witness still lacks it,
/// and otherwise switches to the lowest-index sequence lacking it. The left
/// flank is lacked by every sequence, so it adopts the first witness chosen
/// after it.
pub fn brute_force_delta(sequences: &[Sequence]) -> usize {
    let Some((min, max)) = universe_of(sequences) else {
        return 1;
    };

    let mut runs = 1;
    // `None` while still inside the left flank run.
    let mut previous: Option<Label> = None;

    for x in min..=max {
        let Some(lowest) = sequences.iter().position(|s| !s.contains(x)) else {
            runs += 1;
            previous = Some(Label::Point);
            continue;
        };
        match previous {
            Some(Label::Witness(w)) if !sequences[w].contains(x) => {}
            None => previous = Some(Label::Witness(lowest)),
            Some(_) => {
                runs += 1;
                previous = Some(Label::Witness(lowest));
            }
        }
    }

    // The right flank extends a witness run but not a point.
    if previous == Some(Label::Point) {
        runs += 1;
    }
    runs
}
