//! Error types for launcher operations.

use thiserror::Error;

/// Errors that can occur while preparing or performing the handoff.
///
/// A missing host is the only condition the launcher validates itself;
/// everything else (bad ports, unreachable services, harness failures)
/// surfaces from the downstream program.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no target host given: pass <HOST> or set WA_HOST")]
    MissingHost,

    #[error("Setup error: {0}")]
    Setup(String),

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
