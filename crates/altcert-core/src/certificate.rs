//! Partition certificates.
//!
//! A [`Certificate`] is an ordered list of [`Interval`]s partitioning the
//! integer line. Each interval is either a singleton whose point lies in
//! every sequence, or a range certified empty in one witness sequence. The
//! interval count is the alternation complexity δ.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bound::Bound;
use crate::error::{AltcertError, Result};

/// What an interval certifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntervalKind {
    /// The single point belongs to every sequence.
    Singleton,
    /// Sequence `witness` has no element in the interval. `None` only for
    /// the certificate of zero sequences.
    Certified { witness: Option<usize> },
}

/// One piece of a partition certificate.
///
/// A certified interval spans `[left, right)`. When it directly follows the
/// singleton `{left}` it is open on the left as well and covers
/// `(left, right)`; `open_left` records that, keeping `left` equal to the
/// previous interval's right bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub left: Bound,
    pub right: Bound,
    pub kind: IntervalKind,
    #[serde(default)]
    pub open_left: bool,
}

impl Interval {
    pub fn singleton(value: i64) -> Self {
        Self {
            left: Bound::Finite(value),
            right: Bound::Finite(value),
            kind: IntervalKind::Singleton,
            open_left: false,
        }
    }

    /// A certified interval; fails with [`AltcertError::InvalidRange`] when
    /// it would cover no integer.
    pub fn certified(
        left: Bound,
        right: Bound,
        witness: Option<usize>,
        open_left: bool,
    ) -> Result<Self> {
        let interval = Self {
            left,
            right,
            kind: IntervalKind::Certified { witness },
            open_left,
        };
        let (start, end) = interval.coverage();
        if start >= end {
            return Err(AltcertError::InvalidRange {
                start: left,
                end: right,
            });
        }
        Ok(interval)
    }

    pub fn is_singleton(&self) -> bool {
        matches!(self.kind, IntervalKind::Singleton)
    }

    pub fn witness(&self) -> Option<usize> {
        match self.kind {
            IntervalKind::Certified { witness } => witness,
            IntervalKind::Singleton => None,
        }
    }

    /// Integers covered, as a half-open range `[start, end)`.
    pub fn coverage(&self) -> (Bound, Bound) {
        match self.kind {
            IntervalKind::Singleton => (self.left, self.left.successor()),
            IntervalKind::Certified { .. } if self.open_left => {
                (self.left.successor(), self.right)
            }
            IntervalKind::Certified { .. } => (self.left, self.right),
        }
    }

    pub fn covers(&self, value: i64) -> bool {
        let (start, end) = self.coverage();
        start <= Bound::Finite(value) && Bound::Finite(value) < end
    }

    /// Label of the derived per-integer view: `0` for intersection points,
    /// `witness + 1` otherwise.
    pub fn label(&self) -> usize {
        match self.kind {
            IntervalKind::Singleton => 0,
            IntervalKind::Certified { witness } => witness.map_or(0, |w| w + 1),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_singleton() {
            return write!(f, "{{{}}}", self.left);
        }
        let bracket = if self.open_left || self.left == Bound::NegInf {
            '('
        } else {
            '['
        };
        write!(f, "{bracket}{}, {})", self.left, self.right)
    }
}

/// Ordered partition certificate produced by
/// [`crate::builder::CertificateBuilder`].
///
/// The first interval starts at `-∞` and the coverage of the last one ends at
/// `+∞`. Read the end through [`Interval::coverage`] rather than `right`:
/// when `i64::MAX` is shared by every sequence the certificate ends with the
/// singleton `{i64::MAX}`, whose `right` is finite but whose coverage runs to
/// `+∞`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    intervals: Vec<Interval>,
    /// Successor queries issued while building.
    #[serde(default)]
    seeks: u64,
}

impl Certificate {
    /// Wrap already-built intervals. Use
    /// [`crate::verify::verify_certificate`] to check them.
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self {
            intervals,
            seeks: 0,
        }
    }

    pub(crate) fn with_seeks(intervals: Vec<Interval>, seeks: u64) -> Self {
        Self { intervals, seeks }
    }

    /// Alternation complexity δ: the number of intervals.
    pub fn delta(&self) -> usize {
        self.intervals.len()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn seeks(&self) -> u64 {
        self.seeks
    }

    /// Points common to every sequence, in increasing order.
    pub fn intersection(&self) -> Vec<i64> {
        self.intervals
            .iter()
            .filter(|i| i.is_singleton())
            .filter_map(|i| i.left.finite())
            .collect()
    }

    /// The interval covering `value`.
    pub fn covering(&self, value: i64) -> Option<&Interval> {
        let target = Bound::Finite(value);
        let idx = self
            .intervals
            .partition_point(|i| i.coverage().1 <= target);
        self.intervals.get(idx).filter(|i| i.covers(value))
    }

    /// One label per integer of `[min, max]` (see [`Interval::label`]).
    pub fn labels(&self, universe: (i64, i64)) -> Vec<usize> {
        let (min, max) = universe;
        (min..=max)
            .map(|x| self.covering(x).map_or(0, Interval::label))
            .collect()
    }

    /// [`Certificate::labels`] with equal neighbours collapsed.
    pub fn label_runs(&self, universe: (i64, i64)) -> Vec<usize> {
        let mut runs = self.labels(universe);
        runs.dedup();
        runs
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{interval}")?;
        }
        write!(f, "]")
    }
}
