//! Error taxonomy for certificate construction.

use crate::bound::Bound;

/// Errors produced while compressing sequences or building certificates.
#[derive(Debug, thiserror::Error)]
pub enum AltcertError {
    /// An inverted run or an empty certificate interval. Never observable
    /// for well-formed input; seeing one means the construction has a defect.
    #[error("invalid range from {start} to {end}")]
    InvalidRange { start: Bound, end: Bound },

    #[error("invalid input in sequence {sequence} at position {position}: {reason}")]
    InvalidInput {
        sequence: usize,
        position: usize,
        reason: String,
    },

    #[error("sweep cancelled after emitting {emitted} intervals")]
    Cancelled { emitted: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for altcert operations.
pub type Result<T> = std::result::Result<T, AltcertError>;
