//! Run-length interval encoding of sequences.
//!
//! A sequence is re-expressed over a universe `[min_val, max_val]` as
//! alternating maximal runs of present ("belongs") and absent ("gap")
//! integers. Every sequence of a batch shares the batch universe, so edge
//! gap runs line up across sequences swept together.
//!
//! The encoding exists to make successor queries O(log r) in the number of
//! runs, see [`crate::seek`].

use serde::{Deserialize, Serialize};

use crate::bound::Bound;
use crate::error::{AltcertError, Result};
use crate::obs::emit_batch_compressed;
use crate::sequence::{universe_of, Sequence};
use crate::METRICS;

/// A closed interval `[start, end]` of uniform membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub start: i64,
    pub end: i64,
    /// `true` when every integer of the run is in the sequence, `false` when
    /// none is.
    pub belongs: bool,
}

impl Run {
    /// Returns [`AltcertError::InvalidRange`] when `start > end`.
    pub fn new(start: i64, end: i64, belongs: bool) -> Result<Self> {
        if start > end {
            return Err(AltcertError::InvalidRange {
                start: Bound::Finite(start),
                end: Bound::Finite(end),
            });
        }
        Ok(Self {
            start,
            end,
            belongs,
        })
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Number of integers covered.
    pub fn width(&self) -> u64 {
        self.end.abs_diff(self.start) + 1
    }
}

/// The runs of one sequence, tiling `universe` in increasing order.
///
/// # Invariants
///
/// Runs are contiguous (`runs[i].end + 1 == runs[i + 1].start`), alternate in
/// `belongs`, and together cover exactly `universe`. An empty list means the
/// universe itself is unknown (every sequence of the batch was empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunList {
    runs: Vec<Run>,
    universe: Option<(i64, i64)>,
}

impl RunList {
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn universe(&self) -> Option<(i64, i64)> {
        self.universe
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of integers the source sequence holds.
    pub fn member_count(&self) -> u64 {
        self.runs.iter().filter(|r| r.belongs).map(Run::width).sum()
    }

    /// Expand back into the sorted values.
    pub fn to_sequence(&self) -> Sequence {
        let values = self
            .runs
            .iter()
            .filter(|r| r.belongs)
            .flat_map(|r| r.start..=r.end)
            .collect();
        Sequence::new(values)
    }

    /// Index of the first run whose end is at or above `value`.
    pub(crate) fn first_run_ending_at_or_after(&self, value: i64) -> usize {
        self.runs.partition_point(|r| r.end < value)
    }
}

/// Compress one sequence against `universe`.
///
/// Without a universe, the sequence's own extent is used. A value outside a
/// supplied universe is reported as [`AltcertError::InvalidRange`].
pub fn compress(sequence: &Sequence, universe: Option<(i64, i64)>) -> Result<RunList> {
    let universe = match (universe, sequence.first(), sequence.last()) {
        (Some(u), _, _) => u,
        (None, Some(first), Some(last)) => (first, last),
        _ => return Ok(RunList::default()),
    };
    let (min_val, max_val) = universe;
    let values = sequence.values();

    let Some((&first, _)) = values.split_first() else {
        return Ok(RunList {
            runs: vec![Run::new(min_val, max_val, false)?],
            universe: Some(universe),
        });
    };

    if first < min_val {
        return Err(AltcertError::InvalidRange {
            start: Bound::Finite(min_val),
            end: Bound::Finite(first),
        });
    }

    let mut runs = Vec::new();
    if first > min_val {
        runs.push(Run::new(min_val, first - 1, false)?);
    }

    let mut block_start = first;
    let mut block_end = first;
    for &v in &values[1..] {
        if block_end.checked_add(1) == Some(v) {
            block_end = v;
            continue;
        }
        runs.push(Run::new(block_start, block_end, true)?);
        runs.push(Run::new(block_end + 1, v - 1, false)?);
        block_start = v;
        block_end = v;
    }
    runs.push(Run::new(block_start, block_end, true)?);

    if block_end < max_val {
        runs.push(Run::new(block_end + 1, max_val, false)?);
    } else if block_end > max_val {
        return Err(AltcertError::InvalidRange {
            start: Bound::Finite(block_end),
            end: Bound::Finite(max_val),
        });
    }

    Ok(RunList {
        runs,
        universe: Some(universe),
    })
}

/// Compress every sequence against the shared batch universe.
pub fn compress_batch(sequences: &[Sequence]) -> Result<Vec<RunList>> {
    let universe = universe_of(sequences);
    let lists = sequences
        .iter()
        .map(|s| compress(s, universe))
        .collect::<Result<Vec<_>>>()?;

    METRICS.add_sequences_compressed(lists.len() as u64);
    emit_batch_compressed(
        lists.len(),
        lists.iter().map(RunList::len).sum(),
        universe,
    );
    Ok(lists)
}
