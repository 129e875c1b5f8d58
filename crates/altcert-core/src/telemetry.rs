//! Tracing initialisation for programs embedding altcert.
//!
//! The library only emits events; a benchmark harness or test binary calls
//! [`init_tracing`] once to install a subscriber. Later calls are ignored
//! because the global subscriber can only be set once per process.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    /// Newline-delimited JSON, for log aggregation.
    Json,
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; without it, events at `level` and above are
/// kept. Returns `false` when a subscriber was already installed.
pub fn init_tracing(format: LogFormat, level: Level) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .is_ok(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false))
            .try_init()
            .is_ok(),
    }
}
