//! Successor queries ("seek") over sequences.
//!
//! `seek(v)` returns the least element `>= v`, or [`Bound::PosInf`] when
//! there is none. Every implementation is idempotent
//! (`seek(seek(v)) == seek(v)`) and non-decreasing in `v`; the certificate
//! sweep relies on both to re-probe the same candidate point.

use crate::bound::Bound;
use crate::runs::RunList;
use crate::sequence::Sequence;

/// Least-element-at-or-above lookup.
pub trait SuccessorQuery {
    fn seek(&self, value: Bound) -> Bound;
}

impl<T: SuccessorQuery + ?Sized> SuccessorQuery for &T {
    fn seek(&self, value: Bound) -> Bound {
        (**self).seek(value)
    }
}

/// Binary search over the sorted values, O(log n).
impl SuccessorQuery for Sequence {
    fn seek(&self, value: Bound) -> Bound {
        let values = self.values();
        let idx = match value {
            Bound::NegInf => 0,
            Bound::PosInf => return Bound::PosInf,
            Bound::Finite(v) => values.partition_point(|&x| x < v),
        };
        values.get(idx).copied().map_or(Bound::PosInf, Bound::Finite)
    }
}

/// Binary search over run boundaries, O(log r) in the number of runs.
impl SuccessorQuery for RunList {
    fn seek(&self, value: Bound) -> Bound {
        let runs = self.runs();
        let v = match value {
            Bound::NegInf => {
                return runs
                    .iter()
                    .find(|r| r.belongs)
                    .map_or(Bound::PosInf, |r| Bound::Finite(r.start))
            }
            Bound::PosInf => return Bound::PosInf,
            Bound::Finite(v) => v,
        };

        let idx = self.first_run_ending_at_or_after(v);
        match runs.get(idx) {
            None => Bound::PosInf,
            Some(run) if run.belongs && run.contains(v) => Bound::Finite(v),
            Some(run) if run.belongs => Bound::Finite(run.start),
            // Runs alternate, so the run after a gap is a member run.
            Some(_) => runs
                .get(idx + 1)
                .map_or(Bound::PosInf, |next| Bound::Finite(next.start)),
        }
    }
}
