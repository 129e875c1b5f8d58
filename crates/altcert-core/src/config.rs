//! Builder configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which successor-query structure backs the sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekBackend {
    /// Binary search over the sorted sequences.
    Raw,
    /// Binary search over run-length compressed sequences.
    #[default]
    Compressed,
}

/// Configuration for [`crate::builder::CertificateBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub backend: SeekBackend,
    /// Log every emitted interval at `debug!` level.
    pub trace_intervals: bool,
}

impl BuilderConfig {
    pub fn raw() -> Self {
        Self {
            backend: SeekBackend::Raw,
            ..Self::default()
        }
    }

    pub fn compressed() -> Self {
        Self {
            backend: SeekBackend::Compressed,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
