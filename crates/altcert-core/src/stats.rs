//! Per-intersection statistics.
//!
//! One [`IntersectionStats`] record describes a single k-way intersection:
//! the list sizes going in, the certificate's δ and the intersection size
//! coming out. Only primary data is stored; aggregates are computed on
//! demand. Benchmark harnesses serialise these records alongside timings.

use serde::{Deserialize, Serialize};

use crate::builder::CertificateBuilder;
use crate::certificate::Certificate;
use crate::error::Result;
use crate::sequence::Sequence;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionStats {
    /// Size of each of the k lists.
    pub list_sizes: Vec<u64>,
    /// δ of the lists.
    pub alternation_complexity: usize,
    /// Number of values common to every list.
    pub result_size: u64,
    /// Successor queries the certificate sweep issued.
    pub seeks: u64,
}

impl IntersectionStats {
    /// Build the certificate for `sequences` and record its statistics.
    pub fn collect(builder: &CertificateBuilder, sequences: &[Sequence]) -> Result<Self> {
        let cert = builder.build_sequences(sequences)?;
        Ok(Self::from_certificate(sequences, &cert))
    }

    pub fn from_certificate(sequences: &[Sequence], cert: &Certificate) -> Self {
        Self {
            list_sizes: sequences.iter().map(|s| s.len() as u64).collect(),
            alternation_complexity: cert.delta(),
            result_size: cert.intervals().iter().filter(|i| i.is_singleton()).count() as u64,
            seeks: cert.seeks(),
        }
    }

    pub fn k(&self) -> usize {
        self.list_sizes.len()
    }

    pub fn min_list_size(&self) -> u64 {
        self.list_sizes.iter().copied().min().unwrap_or(0)
    }

    pub fn max_list_size(&self) -> u64 {
        self.list_sizes.iter().copied().max().unwrap_or(0)
    }

    pub fn avg_list_size(&self) -> f64 {
        if self.list_sizes.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.list_sizes.iter().sum();
        sum as f64 / self.k() as f64
    }
}
