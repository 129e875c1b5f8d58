//! Input sequences and their boundary validation.
//!
//! A [`Sequence`] is always sorted and free of duplicates, whatever order the
//! caller supplied. Values arriving as floats or JSON are checked here so the
//! sweep never sees a non-integral or non-finite value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AltcertError, Result};

/// A strictly increasing list of integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<i64>", into = "Vec<i64>")]
pub struct Sequence {
    values: Vec<i64>,
}

impl Sequence {
    /// Sort and de-duplicate `values`.
    pub fn new(mut values: Vec<i64>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Build from floating point values, rejecting NaN, infinities and
    /// fractional or out-of-range values.
    pub fn from_f64s(values: &[f64]) -> Result<Self> {
        Self::from_f64s_at(0, values)
    }

    fn from_f64s_at(sequence: usize, values: &[f64]) -> Result<Self> {
        let ints = values
            .iter()
            .enumerate()
            .map(|(position, &v)| integral(v).map_err(|reason| invalid(sequence, position, reason)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(ints))
    }

    /// Parse a JSON array of integers.
    pub fn from_json(value: &Value) -> Result<Self> {
        Self::from_json_at(0, value)
    }

    fn from_json_at(sequence: usize, value: &Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| invalid(sequence, 0, "expected a JSON array of integers".to_string()))?;
        let mut ints = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            let v = match item {
                Value::Number(n) => match n.as_i64() {
                    Some(v) => v,
                    None => n
                        .as_f64()
                        .ok_or_else(|| "number is not representable".to_string())
                        .and_then(integral)
                        .map_err(|reason| invalid(sequence, position, reason))?,
                },
                other => {
                    return Err(invalid(
                        sequence,
                        position,
                        format!("expected an integer, found {other}"),
                    ))
                }
            };
            ints.push(v);
        }
        Ok(Self::new(ints))
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<i64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<i64> {
        self.values.last().copied()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.binary_search(&value).is_ok()
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl From<&[i64]> for Sequence {
    fn from(values: &[i64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<Sequence> for Vec<i64> {
    fn from(seq: Sequence) -> Self {
        seq.values
    }
}

/// Normalise a batch of integer lists.
pub fn sequences_from<I, T>(lists: I) -> Vec<Sequence>
where
    I: IntoIterator<Item = T>,
    T: Into<Sequence>,
{
    lists.into_iter().map(Into::into).collect()
}

/// Validate a batch of float lists, reporting the offending list index.
pub fn sequences_from_f64s(lists: &[Vec<f64>]) -> Result<Vec<Sequence>> {
    lists
        .iter()
        .enumerate()
        .map(|(i, values)| Sequence::from_f64s_at(i, values))
        .collect()
}

/// Parse a JSON array of integer arrays.
pub fn sequences_from_json(value: &Value) -> Result<Vec<Sequence>> {
    let lists = value.as_array().ok_or_else(|| AltcertError::InvalidInput {
        sequence: 0,
        position: 0,
        reason: "expected a JSON array of sequences".to_string(),
    })?;
    lists
        .iter()
        .enumerate()
        .map(|(i, list)| Sequence::from_json_at(i, list))
        .collect()
}

/// Smallest and largest value across every sequence, or `None` when all are
/// empty.
pub fn universe_of(sequences: &[Sequence]) -> Option<(i64, i64)> {
    let min = sequences.iter().filter_map(Sequence::first).min()?;
    let max = sequences.iter().filter_map(Sequence::last).max()?;
    Some((min, max))
}

fn integral(v: f64) -> std::result::Result<i64, String> {
    if !v.is_finite() {
        return Err(format!("value {v} is not finite"));
    }
    if v.fract() != 0.0 {
        return Err(format!("value {v} is not an integer"));
    }
    // i64::MAX is not exactly representable; 2^63 is the first float past it.
    if v < i64::MIN as f64 || v >= 9_223_372_036_854_775_808.0 {
        return Err(format!("value {v} is outside the 64-bit integer range"));
    }
    Ok(v as i64)
}

fn invalid(sequence: usize, position: usize, reason: String) -> AltcertError {
    AltcertError::InvalidInput {
        sequence,
        position,
        reason,
    }
}
