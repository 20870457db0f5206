//! Store error types for mess-store.

use mess_core::errors::CoreError;
use thiserror::Error;

/// Errors from store operations and command script replay.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A store, vote, or workflow operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A replayed command failed in strict mode.
    #[error("Script line {line} ({op}) failed: {source}")]
    Step {
        line: u32,
        op: &'static str,
        #[source]
        source: CoreError,
    },

    /// A script line carried a version this build cannot replay.
    #[error("Unsupported script version {version} on line {line}")]
    UnsupportedVersion { line: u32, version: u32 },

    /// The script file could not be read or a line failed to decode.
    #[error("Failed to read script {path}: {source}")]
    Script {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
