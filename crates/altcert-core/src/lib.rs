//! altcert core library
//!
//! Computes alternation complexity certificates for k sorted integer lists:
//! the fewest consecutive intervals that certify, across the whole integer
//! line, either that a point is in every list or that some list has no
//! element in the interval.
//!
//! ## Pipeline
//!
//! raw lists → [`Sequence`] → [`compress_batch`] (optional) →
//! [`CertificateBuilder`] → [`Certificate`]
//!
//! ```rust
//! use altcert_core::alternation_certificate;
//!
//! let cert = alternation_certificate(&[vec![1, 2, 3], vec![5, 6, 7], vec![9, 10, 11]]).unwrap();
//! assert_eq!(cert.delta(), 2);
//! assert_eq!(cert.to_string(), "[(-∞, 9), [9, +∞)]");
//! ```

pub mod bound;
pub mod builder;
pub mod certificate;
pub mod config;
pub mod error;
pub mod grid;
pub mod metrics;
pub mod obs;
pub mod runs;
pub mod seek;
pub mod sequence;
pub mod stats;
pub mod telemetry;
pub mod verify;

pub use bound::Bound;
pub use builder::{alternation_certificate, alternation_complexity, CancelFlag, CertificateBuilder};
pub use certificate::{Certificate, Interval, IntervalKind};
pub use config::{BuilderConfig, SeekBackend};
pub use error::{AltcertError, Result};
pub use grid::{render_grid, GridOptions};
pub use runs::{compress, compress_batch, Run, RunList};
pub use seek::SuccessorQuery;
pub use sequence::{
    sequences_from, sequences_from_f64s, sequences_from_json, universe_of, Sequence,
};
pub use stats::IntersectionStats;
pub use verify::{brute_force_delta, verify_certificate, CertificateViolation};

pub use metrics::METRICS;
pub use obs::{
    emit_batch_compressed, emit_certificate_built, emit_interval_emitted, emit_sweep_cancelled,
    emit_sweep_started, SweepSpan,
};
pub use telemetry::{init_tracing, LogFormat};

/// altcert version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
